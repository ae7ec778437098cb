pub mod controller;

pub use crate::domain::model::{CalculationResult, Outcome, Snapshot};
pub use crate::domain::ports::{ConfigProvider, MultiplyApi};
pub use crate::utils::error::Result;
