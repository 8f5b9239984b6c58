use crate::domain::model::Command;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments. Help is handled by the dispatcher, not clap, so that
/// `help`, `-h` and `--help` all print the same usage text.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "faraday-seed")]
#[command(about = "Validate the local environment and seed the database with demo data")]
#[command(version, disable_help_flag = true, disable_help_subcommand = true)]
pub struct CliArgs {
    /// test, seed or help
    pub command: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Show the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments. Anything clap rejects becomes an unknown command so the
    /// dispatcher reports it with usage and exit code 1. Only `--version` is
    /// returned as an error, for the caller to print and exit with.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(parsed) => Ok(parsed),
            Err(e) if e.kind() == ErrorKind::DisplayVersion => Err(e),
            Err(e) => {
                tracing::debug!("Argument parsing failed: {}", e);
                Ok(Self::unrecognized(&e))
            }
        }
    }

    fn unrecognized(err: &clap::Error) -> Self {
        let offending = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => arg.clone(),
            _ => "invalid arguments".to_string(),
        };
        Self {
            command: Some(offending),
            ..Self::default()
        }
    }

    pub fn command(&self) -> Command {
        if self.help {
            return Command::Help;
        }
        Command::from_arg(self.command.as_deref())
    }
}
