use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What the operator asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Test,
    Seed,
    Help,
    /// No command argument at all.
    Missing,
    Unknown(String),
}

impl Command {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Missing,
            Some("test") => Self::Test,
            Some("seed") => Self::Seed,
            Some("help") | Some("-h") | Some("--help") => Self::Help,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }

    /// Whether this command runs collaborators (and so needs the config file).
    pub fn runs_collaborators(&self) -> bool {
        matches!(self, Self::Test | Self::Seed)
    }
}

/// How a collaborator process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl Outcome {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(crate::utils::error::FAILURE_EXIT_CODE)
    }
}

impl From<std::process::ExitStatus> for Outcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// An external program the dispatcher runs: validator or seeder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    pub working_dir: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl CollaboratorSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: None,
            env: BTreeMap::new(),
        }
    }
}

impl fmt::Display for CollaboratorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        if let Some(dir) = &self.working_dir {
            write!(f, " (in {})", dir)?;
        }
        Ok(())
    }
}

/// Demo login printed after a successful seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_arg() {
        assert_eq!(Command::from_arg(Some("test")), Command::Test);
        assert_eq!(Command::from_arg(Some("seed")), Command::Seed);
        assert_eq!(Command::from_arg(Some("help")), Command::Help);
        assert_eq!(Command::from_arg(Some("-h")), Command::Help);
        assert_eq!(Command::from_arg(Some("--help")), Command::Help);
        assert_eq!(Command::from_arg(None), Command::Missing);
        assert_eq!(
            Command::from_arg(Some("Seed")),
            Command::Unknown("Seed".to_string())
        );
    }

    #[test]
    fn test_only_test_and_seed_run_collaborators() {
        assert!(Command::Test.runs_collaborators());
        assert!(Command::Seed.runs_collaborators());
        assert!(!Command::Help.runs_collaborators());
        assert!(!Command::Missing.runs_collaborators());
        assert!(!Command::Unknown("x".into()).runs_collaborators());
    }

    #[test]
    fn test_outcome_success_and_exit_code() {
        assert!(Outcome::exited(0).success());
        assert!(!Outcome::exited(2).success());
        assert_eq!(Outcome::exited(2).exit_code(), 2);
        assert!(!Outcome::signaled().success());
        assert_eq!(Outcome::signaled().exit_code(), 1);
    }

    #[test]
    fn test_spec_display_quotes_args_with_spaces() {
        let mut spec = CollaboratorSpec::new("python3", &["scripts/seed_database.py", "two words"]);
        assert_eq!(
            spec.to_string(),
            r#"python3 scripts/seed_database.py "two words""#
        );

        spec.working_dir = Some("/srv/app".to_string());
        assert!(spec.to_string().ends_with("(in /srv/app)"));
    }
}
