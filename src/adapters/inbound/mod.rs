pub mod event_file;
pub mod queue_poll;

use crate::adapters::inbound::event_file::EventFile;
use crate::adapters::inbound::queue_poll::QueuePoll;
use crate::ports::inbound::trigger::Trigger;
use crate::ports::outbound::queue::Queue;
use std::path::PathBuf;

/// Reads records from a delivered event when one is given, otherwise takes
/// the next message straight off the queue.
pub fn create_trigger<Q>(event: Option<PathBuf>, queue: Q, queue_url: String) -> Box<dyn Trigger>
where
    Q: Queue + Send + Sync + 'static,
{
    match event {
        Some(path) => Box::new(EventFile::new(path)),
        None => Box::new(QueuePoll::new(queue, queue_url)),
    }
}
