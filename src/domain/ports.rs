use crate::domain::model::CalculationResult;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

/// Remote side of the calculator.
#[async_trait]
pub trait MultiplyApi: Send + Sync {
    async fn multiply(&self, num1: i64, num2: i64) -> Result<CalculationResult>;
}
