use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use figura::{
    ops::{self, FetchOptions},
    reports::{FetchReport, Report, TerminalOutput},
};
use figura_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FetchCommand {
    /// Path to figura.toml (defaults to ./figura.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Where to write the IR
    #[arg(short, long, default_value = "design-ir.json")]
    pub output: PathBuf,

    /// Skip asset export
    #[arg(long)]
    pub no_assets: bool,
}

impl FetchCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let client = super::client(&manifest)?;

        let fetched = ops::fetch(
            &manifest,
            &client,
            FetchOptions {
                assets: !self.no_assets,
            },
        )?;
        ops::write_tree(&fetched.tree, &self.output)?;

        FetchReport::new(&fetched, &self.output).render(&mut TerminalOutput::new());
        Ok(())
    }
}
