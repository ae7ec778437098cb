pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::HttpMultiplyApi;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::controller::RequestController;
pub use crate::domain::model::{CalculationResult, Key, Operand, Outcome, RequestState, Snapshot};
pub use crate::utils::error::{ClientError, Result, ValidationError};
