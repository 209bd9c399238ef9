//! The HTTP seam between the client and the network.

use std::{sync::Arc, time::Duration};

use crate::ClientError;

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues authenticated GET requests.
///
/// Implementations return `Ok` for any response the server produced, including
/// error statuses; `Err` is reserved for requests that never completed.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, token: &str) -> Result<HttpResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str, token: &str) -> Result<HttpResponse, ClientError> {
        (**self).get(url, token)
    }
}

/// Blocking HTTP transport backed by reqwest.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("figura/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport {
                url: String::new(),
                source: Box::new(e),
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, token: &str) -> Result<HttpResponse, ClientError> {
        let failed = |e: reqwest::Error| ClientError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, token)
            .send()
            .map_err(failed)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(failed)?;

        Ok(HttpResponse { status, body })
    }
}
