use crate::domain::message::{CardMessage, QueueRecord};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
#[error("Error in queue operation: {0}")]
pub struct QueueError(String);

impl QueueError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Queue {
    /// Returns the id the queue assigned to the message.
    async fn send(&self, queue_url: &str, message: &CardMessage) -> Result<String, QueueError>;
    async fn receive(&self, queue_url: &str) -> Result<Option<QueueRecord>, QueueError>;
    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), QueueError>;
}
