mod sqs;

use crate::adapters::outbound::queue::sqs::Sqs;
use crate::ports::outbound::queue::Queue;
use aws_config::SdkConfig;

#[must_use]
pub fn init_queue(config: &SdkConfig) -> impl Queue + Clone {
    Sqs::new(config)
}
