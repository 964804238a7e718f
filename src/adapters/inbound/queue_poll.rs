use crate::domain::message::QueueRecord;
use crate::ports::inbound::trigger::{Trigger, TriggerError};
use crate::ports::outbound::queue::Queue;
use async_trait::async_trait;

/// Pulls at most one message per run from the queue.
pub struct QueuePoll<Q> {
    queue: Q,
    queue_url: String,
}

impl<Q> QueuePoll<Q> {
    pub fn new(queue: Q, queue_url: String) -> Self {
        Self { queue, queue_url }
    }
}

#[async_trait]
impl<Q> Trigger for QueuePoll<Q>
where
    Q: Queue + Send + Sync,
{
    async fn records(&self) -> Result<Vec<QueueRecord>, TriggerError> {
        let record = self
            .queue
            .receive(&self.queue_url)
            .await
            .map_err(|why| TriggerError::new(why.to_string()))?;

        if record.is_none() {
            log::info!("No message waiting on {}", self.queue_url);
        }
        Ok(record.into_iter().collect())
    }
}
