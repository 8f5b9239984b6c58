use thiserror::Error;

/// Exit code used for every failure that does not carry a collaborator's own code.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Environment validation failed (exit code {code})")]
    ValidatorFailed { code: i32 },

    #[error("Database seeding failed (exit code {code})")]
    SeederFailed { code: i32 },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Failed to start '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SeedError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Process exit code for this failure. Collaborator failures keep their own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidatorFailed { code } | Self::SeederFailed { code } if *code != 0 => *code,
            _ => FAILURE_EXIT_CODE,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidatorFailed { .. } => {
                "The environment is not ready for seeding".to_string()
            }
            Self::SeederFailed { .. } => "Seeding did not complete".to_string(),
            Self::UnknownCommand(command) => format!("Unknown command: {}", command),
            Self::SpawnError { program, .. } => format!("Could not run '{}'", program),
            Self::IoError(e) => format!("Console I/O failed: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidatorFailed { .. } => {
                "Fix the problems reported above (database, migrations, upload folders) and run 'test' again"
            }
            Self::SeederFailed { .. } => {
                "Check the seeder output above, then run 'test' before retrying 'seed'"
            }
            Self::UnknownCommand(_) => "Run with 'help' to see the available commands",
            Self::SpawnError { .. } => {
                "Make sure the program is installed and on PATH, or adjust it in the config file"
            }
            Self::IoError(_) => "Check that the terminal is still attached and retry",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the config file; see seed.toml in the repository for a working example"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_failures_keep_their_exit_code() {
        assert_eq!(SeedError::ValidatorFailed { code: 3 }.exit_code(), 3);
        assert_eq!(SeedError::SeederFailed { code: 42 }.exit_code(), 42);
    }

    #[test]
    fn zero_code_never_reported_as_failure_exit() {
        assert_eq!(SeedError::SeederFailed { code: 0 }.exit_code(), 1);
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(SeedError::UnknownCommand("bogus".into()).exit_code(), 1);
        assert_eq!(SeedError::config("broken").exit_code(), 1);
        let spawn = SeedError::SpawnError {
            program: "nope".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(spawn.exit_code(), 1);
    }

    #[test]
    fn unknown_command_message_names_the_command() {
        let err = SeedError::UnknownCommand("bogus".into());
        assert_eq!(err.to_string(), "Unknown command: bogus");
        assert_eq!(err.user_friendly_message(), "Unknown command: bogus");
    }
}
