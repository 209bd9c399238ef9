//! Manifest types and parsing for figura.toml files.

mod output;
mod parse;
mod section;
mod source;
mod validate;

use std::time::Duration;

use figura_codegen::TokenMap;
use figura_document::ClientConfig;
use indexmap::IndexMap;
pub use output::{AssetsConfig, OutputConfig};
pub use parse::parse_manifest;
pub use section::Section;
use serde::Deserialize;
pub use source::{DEFAULT_CACHE_TTL_SECS, DEFAULT_TOKEN_ENV, SourceConfig};
pub use validate::ParseContext;

/// Default manifest filename.
pub const MANIFEST_FILE: &str = "figura.toml";

/// Root manifest for figura.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where the design lives
    pub source: SourceConfig,

    /// What to emit and where
    #[serde(default)]
    pub output: OutputConfig,

    /// Rendered-asset export settings
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Design tokens: hex color → CSS custom property
    #[serde(default)]
    pub tokens: IndexMap<String, String>,

    /// Explicit page sections; empty means one per child of the root
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Manifest {
    /// Design tokens in the form emitters consume.
    pub fn token_map(&self) -> TokenMap {
        self.tokens.iter().collect()
    }

    /// Client settings for `access_token`.
    pub fn client_config(&self, access_token: impl Into<String>) -> ClientConfig {
        ClientConfig::new(access_token)
            .with_base_url(self.source.base_url.trim_end_matches('/'))
            .with_cache_ttl(Duration::from_secs(self.source.cache_ttl_secs))
    }

    /// True when sections come from the config rather than the design.
    pub fn has_explicit_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}
