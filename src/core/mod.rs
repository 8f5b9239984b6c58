pub mod dispatcher;
pub mod usage;

pub use crate::domain::model::{Command, Outcome};
pub use crate::domain::ports::{Collaborator, Confirmer};
pub use crate::utils::error::Result;
