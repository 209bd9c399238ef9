use std::path::PathBuf;

use figura_core::Target;
use figura_document::AssetFormat;
use serde::Deserialize;

/// `[output]`: targets and file layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output root, relative to the manifest
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,

    /// Page name (kebab-case), written to `pages/<page>.astro`
    #[serde(default = "default_page")]
    pub page: String,

    /// Document title; the page name when empty
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            targets: default_targets(),
            page: default_page(),
            title: String::new(),
            description: String::new(),
        }
    }
}

impl OutputConfig {
    /// Directory section components are written to.
    pub fn components_dir(&self) -> PathBuf {
        self.dir.join("components").join("sections")
    }

    /// Path of the assembled page.
    pub fn page_path(&self) -> PathBuf {
        self.dir.join("pages").join(format!("{}.astro", self.page))
    }

    /// Path of the stylesheet the page imports.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.dir.join("styles").join("global.css")
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_targets() -> Vec<Target> {
    vec![Target::React]
}

fn default_page() -> String {
    "index".to_string()
}

/// `[assets]`: rendered-asset export.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub format: AssetFormat,

    /// Export scale, in (0, 4]
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            format: AssetFormat::default(),
            scale: default_scale(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_scale() -> f64 {
    2.0
}
