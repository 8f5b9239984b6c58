// Adapters layer: concrete implementations of the domain ports (child processes, stdin).

pub mod process;
pub mod prompt;

pub use process::ProcessCollaborator;
pub use prompt::{AssumeYes, LineConfirmer};
