use crate::domain::message::QueueRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Error reading trigger: {0}")]
pub struct TriggerError(String);

impl TriggerError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Source of the queue records a publish run works through.
#[async_trait]
pub trait Trigger {
    async fn records(&self) -> Result<Vec<QueueRecord>, TriggerError>;
}
