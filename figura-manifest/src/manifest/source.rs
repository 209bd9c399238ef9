use figura_document::DEFAULT_BASE_URL;
use serde::Deserialize;

/// Environment variable holding the access token unless overridden.
pub const DEFAULT_TOKEN_ENV: &str = "FIGMA_PERSONAL_ACCESS_TOKEN";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// `[source]`: the design file and the node to compile.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Key of the design file (from its URL)
    pub file_key: String,

    /// Root node of the page, e.g. `530:5377`
    pub node_id: String,

    /// Environment variable the access token is read from
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Lifetime of cached subtree responses
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}
