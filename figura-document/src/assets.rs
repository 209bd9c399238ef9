//! Late binding of exported asset URLs onto a parsed tree.

use figura_ir::{ComponentType, IrDesignTree, IrNode};
use tracing::{info, warn};

use crate::{AssetFormat, DocumentClient};

/// Outcome of [`resolve_assets`].
///
/// Unresolved assets are not errors: the affected nodes keep no URL and
/// emitters render an empty reference for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    /// Distinct asset node ids that were requested.
    pub requested: usize,
    /// Ids that received a URL.
    pub resolved: Vec<String>,
    /// Ids the service returned no URL for.
    pub missing: Vec<String>,
    /// Set when the export request as a whole failed.
    pub failure: Option<String>,
}

impl AssetReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.failure.is_none()
    }
}

/// Ids of nodes that need an exported asset, in document order, deduplicated.
///
/// Image nodes and nodes painted with an image fill qualify.
pub fn asset_node_ids(root: &IrNode) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for node in root.iter() {
        let wants_asset = node.component_type == ComponentType::Image || node.has_image_fill();
        if wants_asset && !ids.contains(&node.id) {
            ids.push(node.id.clone());
        }
    }
    ids
}

/// Export every asset in `tree` and patch the URLs onto it.
///
/// Never fails: a rejected export is logged and recorded in the report.
pub fn resolve_assets(
    client: &DocumentClient,
    file_key: &str,
    tree: &mut IrDesignTree,
    format: AssetFormat,
    scale: f64,
) -> AssetReport {
    let ids = asset_node_ids(&tree.root);
    let mut report = AssetReport {
        requested: ids.len(),
        ..AssetReport::default()
    };
    if ids.is_empty() {
        return report;
    }

    let urls = match client.export_assets(file_key, &ids, format, scale) {
        Ok(urls) => urls,
        Err(err) => {
            warn!(error = %err, "asset export failed, continuing without asset urls");
            report.failure = Some(err.to_string());
            report.missing = ids;
            return report;
        }
    };

    for (id, url) in urls {
        match url {
            Some(url) => {
                tree.patch_asset_url(&id, &url);
                report.resolved.push(id);
            }
            None => {
                warn!(node = %id, "no asset url returned");
                report.missing.push(id);
            }
        }
    }

    info!(
        resolved = report.resolved.len(),
        missing = report.missing.len(),
        "asset urls bound"
    );
    report
}
