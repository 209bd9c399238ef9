use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use figura::{
    ops::{self, FetchOptions, GenerateOptions},
    reports::{Report, TerminalOutput},
};
use figura_manifest::{MANIFEST_FILE, Manifest};
use tracing::warn;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to figura.toml (defaults to ./figura.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Use a saved IR file instead of fetching the design
    #[arg(long)]
    pub ir: Option<PathBuf>,

    /// Skip asset export when fetching
    #[arg(long, conflicts_with = "ir")]
    pub no_assets: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let tree = match &self.ir {
            Some(path) => {
                let tree = ops::read_tree(path)?;
                if tree.meta.root_node_id != manifest.source.node_id {
                    warn!(
                        ir = %tree.meta.root_node_id,
                        config = %manifest.source.node_id,
                        "IR root differs from the configured node"
                    );
                }
                tree
            }
            None => {
                let client = super::client(&manifest)?;
                let opts = FetchOptions {
                    assets: !self.no_assets,
                };
                ops::fetch(&manifest, &client, opts)?.tree
            }
        };

        let root = self.config.parent().unwrap_or(Path::new(""));
        let report = ops::generate(
            &manifest,
            &tree,
            GenerateOptions {
                root,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
