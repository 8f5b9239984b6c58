use crate::domain::model::{CollaboratorSpec, Outcome};
use crate::domain::ports::Collaborator;
use crate::utils::error::{Result, SeedError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs a [`CollaboratorSpec`] as a child process with inherited stdio.
#[derive(Debug, Clone)]
pub struct ProcessCollaborator {
    spec: CollaboratorSpec,
}

impl ProcessCollaborator {
    pub fn new(spec: CollaboratorSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &CollaboratorSpec {
        &self.spec
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.spec.program);
        command
            .args(&self.spec.args)
            .envs(&self.spec.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.spec.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

#[async_trait]
impl Collaborator for ProcessCollaborator {
    async fn run(&self) -> Result<Outcome> {
        tracing::debug!("Spawning collaborator: {}", self.spec);

        let status = self
            .command()
            .status()
            .await
            .map_err(|source| SeedError::SpawnError {
                program: self.spec.program.clone(),
                source,
            })?;

        let outcome = Outcome::from(status);
        match outcome.code {
            Some(code) => tracing::debug!("'{}' exited with code {}", self.spec.program, code),
            None => tracing::warn!("'{}' was terminated by a signal", self.spec.program),
        }
        Ok(outcome)
    }

    fn describe(&self) -> String {
        self.spec.to_string()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> ProcessCollaborator {
        ProcessCollaborator::new(CollaboratorSpec::new("sh", &["-c", script]))
    }

    #[tokio::test]
    async fn test_exit_code_is_reported() {
        assert_eq!(shell("exit 0").run().await.unwrap(), Outcome::exited(0));
        assert_eq!(shell("exit 7").run().await.unwrap(), Outcome::exited(7));
    }

    #[tokio::test]
    async fn test_env_and_working_dir_are_applied() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut spec = CollaboratorSpec::new(
            "sh",
            &["-c", r#"[ "$SEED_MARKER" = "on" ] && [ "$(pwd -P)" = "$EXPECTED_DIR" ]"#],
        );
        let expected = dir.path().canonicalize().unwrap();
        spec.working_dir = Some(dir.path().to_string_lossy().into_owned());
        spec.env.insert("SEED_MARKER".into(), "on".into());
        spec.env
            .insert("EXPECTED_DIR".into(), expected.to_string_lossy().into_owned());

        let outcome = ProcessCollaborator::new(spec).run().await.unwrap();
        assert!(outcome.success());
    }

    #[tokio::test]
    async fn test_signal_termination_has_no_code() {
        let outcome = shell("kill -TERM $$").run().await.unwrap();
        assert_eq!(outcome, Outcome::signaled());
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let collaborator =
            ProcessCollaborator::new(CollaboratorSpec::new("definitely-not-a-real-program-4821", &[]));
        let err = collaborator.run().await.unwrap_err();
        assert!(matches!(err, SeedError::SpawnError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_describe_uses_spec_display() {
        assert_eq!(shell("exit 0").describe(), r#"sh -c "exit 0""#);
    }
}
