use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use figura::reports::{CheckReport, Report, TerminalOutput};
use figura_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to figura.toml (defaults to ./figura.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        CheckReport::new(&manifest, &self.config).render(&mut TerminalOutput::new());
        Ok(())
    }
}
