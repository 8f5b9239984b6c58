use crate::config::DEFAULT_CONFIG_FILE;
use crate::domain::model::Command;
use crate::utils::console::Console;
use crate::utils::error::SeedError;
use std::io::{self, Write};

pub const PROGRAM_NAME: &str = "faraday-seed";

pub fn usage_text() -> String {
    format!(
        "\
Usage: {program} [OPTIONS] <COMMAND>

Commands:
  test    Check that the environment is ready for seeding
  seed    Check the environment, then seed the database with demo data
  help    Show this help

Options:
  -c, --config <PATH>  Configuration file [default: {config}]
  -y, --yes            Seed without asking for confirmation
      --dry-run        Show the commands that would run
  -v, --verbose        Enable debug logging on stderr
  -V, --version        Print version
  -h, --help           Show this help

Examples:
  {program} test       # validate only
  {program} seed       # validate, confirm, then seed",
        program = PROGRAM_NAME,
        config = DEFAULT_CONFIG_FILE,
    )
}

pub fn print_usage<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    console.heading("Faraday database seeder")?;
    console.plain_line(&usage_text())
}

/// Handles the commands that never run a collaborator and returns the exit code.
/// `Test` and `Seed` belong to the dispatcher and get exit code 1 here.
pub fn respond<W: Write>(console: &mut Console<W>, command: &Command) -> i32 {
    write_response(console, command).unwrap_or_else(|e| {
        tracing::error!("Failed to write to console: {}", e);
        1
    })
}

fn write_response<W: Write>(console: &mut Console<W>, command: &Command) -> io::Result<i32> {
    match command {
        Command::Help => {
            print_usage(console)?;
            Ok(0)
        }
        Command::Missing => {
            console.warn("⚠️  No command specified")?;
            console.blank()?;
            print_usage(console)?;
            Ok(0)
        }
        Command::Unknown(other) => {
            let err = SeedError::UnknownCommand(other.clone());
            tracing::error!("❌ {}", err);
            console.error(&format!("❌ {}", err.user_friendly_message()))?;
            console.blank()?;
            print_usage(console)?;
            Ok(err.exit_code())
        }
        Command::Test | Command::Seed => {
            tracing::debug!("{:?} needs collaborators; not handled here", command);
            Ok(1)
        }
    }
}
