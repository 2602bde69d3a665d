use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bp` binary.
#[derive(Debug, Parser)]
#[command(name = "bp", version, about = "Blueprint - design entity store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, pretty
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store root directory (overrides `store.root`)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["bp", "--format", "pretty", "--verbose", "gaps"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Gaps));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["bp", "coverage", "--quiet", "--root", "/tmp/design"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(
            cli.global_flags().root.as_deref(),
            Some(std::path::Path::new("/tmp/design"))
        );
        assert!(matches!(cli.command, Commands::Coverage));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["bp", "--format", "table", "gaps"]).is_err());
    }

    #[test]
    fn delete_force_flag() {
        let cli = Cli::try_parse_from(["bp", "delete", "capability", "cap-a", "--force"])
            .expect("cli should parse");
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.kind, "capability");
                assert_eq!(args.id, "cap-a");
                assert!(args.force);
            }
            other => panic!("expected delete, got {other:?}"),
        }
    }

    #[test]
    fn link_takes_five_positionals() {
        let cli = Cli::try_parse_from([
            "bp", "link", "workflow", "W1", "component", "comp-x", "suggests",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Link(args) => {
                assert_eq!(args.from_id, "W1");
                assert_eq!(args.relation, "suggests");
            }
            other => panic!("expected link, got {other:?}"),
        }
    }
}
