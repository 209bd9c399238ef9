use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        write_completions(self.shell, &mut io::stdout().lock())
    }
}

/// Completion script for `shell`, registered under the binary's own name.
fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_cover_every_subcommand() {
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();

        assert!(script.contains("_figura()"));
        for subcommand in ["check", "fetch", "generate", "completions"] {
            assert!(script.contains(subcommand), "missing {subcommand}");
        }
    }
}
