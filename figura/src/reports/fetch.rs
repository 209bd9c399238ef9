//! Fetch command report data structures.

use std::path::{Path, PathBuf};

use figura_document::AssetReport;

use super::output::{Output, Report};
use crate::ops::Fetched;

/// Report data from fetching a design.
#[derive(Debug)]
pub struct FetchReport {
    pub file_name: String,
    pub last_modified: String,
    pub nodes: usize,
    pub components: usize,
    pub assets: Option<AssetReport>,
    pub output: PathBuf,
}

impl FetchReport {
    pub fn new(fetched: &Fetched, output: &Path) -> Self {
        let tree = &fetched.tree;
        Self {
            file_name: tree.meta.file_name.clone(),
            last_modified: tree.meta.last_modified.clone(),
            nodes: tree.root.iter().count(),
            components: tree.components.len(),
            assets: fetched.assets.clone(),
            output: output.to_path_buf(),
        }
    }
}

impl Report for FetchReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(assets) = &self.assets {
            if let Some(failure) = &assets.failure {
                out.warning(&format!("asset export failed: {failure}"));
            } else {
                for id in &assets.missing {
                    out.warning(&format!("no asset rendered for node {id}"));
                }
            }
        }

        out.preformatted(&format!(
            "{} (modified {})",
            self.file_name, self.last_modified
        ));
        out.key_value("nodes", &self.nodes.to_string());
        out.key_value("components", &self.components.to_string());
        let assets = match &self.assets {
            Some(assets) => format!("{} of {} resolved", assets.resolved.len(), assets.requested),
            None => "skipped".to_string(),
        };
        out.key_value("assets", &assets);
        out.newline();
        out.preformatted(&format!("Wrote {}", self.output.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorder;

    fn report(assets: Option<AssetReport>) -> FetchReport {
        FetchReport {
            file_name: "Landing".to_string(),
            last_modified: "2024-06-01T12:00:00Z".to_string(),
            nodes: 12,
            components: 1,
            assets,
            output: PathBuf::from("design-ir.json"),
        }
    }

    #[test]
    fn test_render_partial_assets() {
        let assets = AssetReport {
            requested: 3,
            resolved: vec!["1:5".to_string(), "1:6".to_string()],
            missing: vec!["1:7".to_string()],
            failure: None,
        };
        let mut out = Recorder::default();
        report(Some(assets)).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: no asset rendered for node 1:7",
                "Landing (modified 2024-06-01T12:00:00Z)",
                "  nodes: 12",
                "  components: 1",
                "  assets: 2 of 3 resolved",
                "",
                "Wrote design-ir.json",
            ]
        );
    }

    #[test]
    fn test_render_failed_export_once() {
        let assets = AssetReport {
            requested: 2,
            resolved: Vec::new(),
            missing: vec!["1:5".to_string(), "1:6".to_string()],
            failure: Some("rate limited".to_string()),
        };
        let mut out = Recorder::default();
        report(Some(assets)).render(&mut out);

        assert_eq!(out.lines[0], "warning: asset export failed: rate limited");
        assert_eq!(out.lines[1], "Landing (modified 2024-06-01T12:00:00Z)");
    }

    #[test]
    fn test_render_skipped_assets() {
        let mut out = Recorder::default();
        report(None).render(&mut out);
        assert!(out.lines.contains(&"  assets: skipped".to_string()));
    }
}
