pub mod demo;

pub use crate::domain::model::{Record, SharedRecord};
pub use crate::domain::ports::{Phase, ScenarioProvider};
pub use crate::utils::error::Result;
