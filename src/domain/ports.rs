use crate::domain::model::CardOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of "today" for age computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[async_trait]
pub trait CardRunner: Send + Sync {
    /// Runs the card build to completion. A non-zero exit is an error.
    async fn generate(&self) -> Result<CardOutcome>;
}

