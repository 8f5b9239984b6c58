use crate::domain::model::Outcome;
use crate::utils::error::Result;
use async_trait::async_trait;

/// An external process the dispatcher waits on.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Runs to completion. `Err` only when the process could not be started.
    async fn run(&self) -> Result<Outcome>;

    /// Human-readable command line, used for dry runs and logs.
    fn describe(&self) -> String;
}

/// Reads the operator's answer to a yes/no question already shown on the console.
pub trait Confirmer {
    fn confirm(&mut self) -> Result<bool>;

    /// Whether the question should be shown at all.
    fn is_interactive(&self) -> bool {
        true
    }
}
