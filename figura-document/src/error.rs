use thiserror::Error;

/// Errors returned by [`DocumentClient`](crate::DocumentClient).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authentication failed, check the design service access token")]
    Auth,

    #[error("access denied to file '{file_key}', ensure the token can read it")]
    Access { file_key: String },

    #[error("file '{}' or node(s) '{}' not found", .file_key, .ids.join(", "))]
    NotFound { file_key: String, ids: Vec<String> },

    #[error("design service rate limit exceeded, wait a moment and try again")]
    RateLimited,

    #[error("design service returned {status}: {body}")]
    UnknownService { status: u16, body: String },

    #[error("asset export failed: {0}")]
    Export(String),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to decode design service response")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Map a non-success HTTP status to the matching error.
    pub fn from_status(status: u16, body: &str, file_key: &str, ids: &[String]) -> Self {
        match status {
            401 => ClientError::Auth,
            403 => ClientError::Access {
                file_key: file_key.to_string(),
            },
            404 => ClientError::NotFound {
                file_key: file_key.to_string(),
                ids: ids.to_vec(),
            },
            429 => ClientError::RateLimited,
            _ => ClientError::UnknownService {
                status,
                body: body.to_string(),
            },
        }
    }

    /// Credential problems affect every request, so callers should not
    /// treat them as a partial failure.
    pub fn is_credential(&self) -> bool {
        matches!(self, ClientError::Auth | ClientError::Access { .. })
    }
}
