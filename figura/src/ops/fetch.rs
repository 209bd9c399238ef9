//! Fetch operation - design document to IR.

use std::path::Path;

use eyre::{Context, Result, eyre};
use figura_document::{AssetReport, DocumentClient, resolve_assets};
use figura_ir::IrDesignTree;
use figura_manifest::Manifest;
use tracing::info;

/// Options for the fetch operation.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Export rendered assets and bind their URLs (when the manifest allows).
    pub assets: bool,
}

/// A parsed design and the outcome of asset resolution.
#[derive(Debug)]
pub struct Fetched {
    pub tree: IrDesignTree,
    /// `None` when assets were not requested.
    pub assets: Option<AssetReport>,
}

/// Read the access token from the variable the manifest names.
pub fn access_token(manifest: &Manifest) -> Result<String> {
    let var = &manifest.source.token_env;
    let token =
        std::env::var(var).wrap_err_with(|| format!("Environment variable {var} is not set"))?;
    let token = token.trim();
    if token.is_empty() {
        return Err(eyre!("Environment variable {var} is empty"));
    }
    Ok(token.to_string())
}

/// Execute the fetch operation.
///
/// Fetches the manifest's root node, lowers it to IR and, unless disabled,
/// binds exported asset URLs. Asset failures are reported, not returned.
pub fn fetch(manifest: &Manifest, client: &DocumentClient, opts: FetchOptions) -> Result<Fetched> {
    let source = &manifest.source;
    let document = client
        .fetch_subtree(&source.file_key, std::slice::from_ref(&source.node_id))
        .wrap_err("Failed to fetch design document")?;
    let mut tree = figura_parser::parse(&document, &source.node_id)
        .wrap_err("Failed to parse design document")?;
    info!(
        file = %tree.meta.file_name,
        nodes = tree.root.iter().count(),
        "parsed design"
    );

    let assets = (opts.assets && manifest.assets.enabled).then(|| {
        resolve_assets(
            client,
            &source.file_key,
            &mut tree,
            manifest.assets.format,
            manifest.assets.scale,
        )
    });

    Ok(Fetched { tree, assets })
}

/// Persist `tree` as pretty JSON.
pub fn write_tree(tree: &IrDesignTree, path: &Path) -> Result<()> {
    let json = tree.to_json_pretty().wrap_err("Failed to serialize IR")?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

/// Load a tree written by [`write_tree`].
pub fn read_tree(path: &Path) -> Result<IrDesignTree> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    IrDesignTree::from_json(&json)
        .wrap_err_with(|| format!("{} is not a figura IR file", path.display()))
}

#[cfg(test)]
mod tests {
    use figura_codegen::testing;
    use figura_ir::SourceMeta;

    use super::*;

    #[test]
    fn test_tree_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/design-ir.json");
        let meta = SourceMeta {
            file_name: "Landing".to_string(),
            last_modified: "2024-06-01T12:00:00Z".to_string(),
            root_node_id: "1:1".to_string(),
        };
        let tree = IrDesignTree::new(meta, testing::hello_submit());

        write_tree(&tree, &path).unwrap();
        assert_eq!(read_tree(&path).unwrap(), tree);
    }

    #[test]
    fn test_read_tree_rejects_other_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name": "site"}"#).unwrap();

        let err = read_tree(&path).unwrap_err();
        assert!(err.to_string().ends_with("is not a figura IR file"));
    }

    #[test]
    fn test_missing_token_variable() {
        let manifest: Manifest = "[source]\nfile_key = \"k\"\nnode_id = \"1:1\"\n\
                                  token_env = \"FIGURA_TEST_TOKEN_THAT_IS_NEVER_SET\"\n"
            .parse()
            .unwrap();
        let err = access_token(&manifest).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable FIGURA_TEST_TOKEN_THAT_IS_NEVER_SET is not set"
        );
    }
}
