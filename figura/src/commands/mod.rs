mod check;
mod completions;
mod fetch;
mod generate;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fetch::FetchCommand;
use figura_document::DocumentClient;
use figura_manifest::Manifest;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for figura_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Client for the design service named in `manifest`.
fn client(manifest: &Manifest) -> Result<DocumentClient> {
    let token = figura::ops::access_token(manifest)?;
    Ok(DocumentClient::new(manifest.client_config(token))?)
}

#[derive(Parser)]
#[command(name = "figura")]
#[command(version)]
#[command(about = "Compile design documents into React, Vue and Angular components")]
pub(crate) struct Cli {
    /// Log more (-v info, -vv debug); FIGURA_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Fetch(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate figura.toml without contacting the design service
    Check(CheckCommand),

    /// Fetch the design and save its IR as JSON
    Fetch(FetchCommand),

    /// Emit section components and the page
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["figura", "-vv", "check"]);
        assert_eq!(cli.verbosity(), 2);

        let cli = Cli::parse_from(["figura", "generate", "--dry-run", "-v"]);
        assert_eq!(cli.verbosity(), 1);
    }
}
