//! Check command report data structures.

use std::path::{Path, PathBuf};

use figura_manifest::Manifest;

use super::output::{Output, Report};

/// Summary of a valid manifest.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub source: String,
    pub targets: Vec<String>,
    pub page: PathBuf,
    /// Configured section names; empty when sections come from the design.
    pub sections: Vec<String>,
    pub tokens: usize,
    /// Asset export settings, `None` when disabled.
    pub assets: Option<String>,
}

impl CheckReport {
    pub fn new(manifest: &Manifest, config_path: &Path) -> Self {
        let assets = &manifest.assets;
        Self {
            config_path: config_path.to_path_buf(),
            source: format!(
                "{} (node {})",
                manifest.source.file_key, manifest.source.node_id
            ),
            targets: manifest
                .output
                .targets
                .iter()
                .map(|target| target.to_string())
                .collect(),
            page: manifest.output.page_path(),
            sections: manifest
                .sections
                .iter()
                .map(|section| section.name.clone())
                .collect(),
            tokens: manifest.tokens.len(),
            assets: assets
                .enabled
                .then(|| format!("{} at {}x", assets.format, assets.scale)),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("source", &self.source);
        out.key_value("targets", &self.targets.join(", "));
        out.key_value("page", &self.page.display().to_string());
        if self.sections.is_empty() {
            out.key_value("sections", "one per top-level frame");
        } else {
            out.key_value("sections", &self.sections.join(", "));
        }
        out.key_value("tokens", &self.tokens.to_string());
        out.key_value("assets", self.assets.as_deref().unwrap_or("disabled"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorder;

    #[test]
    fn test_render() {
        let manifest: Manifest = "[source]\nfile_key = \"AbC\"\nnode_id = \"1:1\"\n\n\
                                  [output]\ntargets = [\"vue\", \"angular\"]\n\n\
                                  [assets]\nformat = \"svg\"\nscale = 1.0\n"
            .parse()
            .unwrap();
        let mut out = Recorder::default();
        CheckReport::new(&manifest, Path::new("figura.toml")).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "✓ figura.toml is valid",
                "",
                "  source: AbC (node 1:1)",
                "  targets: vue, angular",
                "  page: generated/pages/index.astro",
                "  sections: one per top-level frame",
                "  tokens: 0",
                "  assets: svg at 1x",
            ]
        );
    }
}
