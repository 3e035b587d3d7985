pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{DemoConfig, ScenarioConfig};
pub use core::demo::{AliasingOutcome, CopyDemo, DemoReport, DuplicationOutcome};
pub use domain::model::{Record, SharedRecord};
pub use utils::error::{DemoError, Result};
