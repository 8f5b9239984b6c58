pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{AssumeYes, LineConfirmer, ProcessCollaborator};
pub use config::SeedConfig;
pub use crate::core::dispatcher::{DispatchOptions, Dispatcher};
pub use domain::model::{Command, Outcome};
pub use utils::error::{Result, SeedError};
