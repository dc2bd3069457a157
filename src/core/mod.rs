pub mod age;
pub mod card;
pub mod readme;
pub mod substitution;
pub mod updater;

pub use crate::domain::model::{CardCommand, CardFailurePolicy, CardOutcome, RunReport, UpdateReport};
pub use crate::domain::ports::{CardRunner, Clock};
pub use crate::utils::error::Result;
