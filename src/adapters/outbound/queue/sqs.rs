use crate::domain::message::{CardMessage, QueueRecord};
use crate::ports::outbound::queue::{Queue, QueueError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::{Message, MessageAttributeValue};
use aws_sdk_sqs::Client;

const WAIT_TIME_SECONDS: i32 = 20;

#[derive(Clone)]
pub struct Sqs {
    client: Client,
}

impl Sqs {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl Queue for Sqs {
    async fn send(&self, queue_url: &str, message: &CardMessage) -> Result<String, QueueError> {
        let mut request = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(message.body());

        for (name, value) in message.attributes() {
            let attribute = MessageAttributeValue::builder()
                .data_type("String")
                .string_value(value)
                .build()
                .map_err(|why| QueueError::new(format!("Bad attribute {name}: {why}")))?;
            request = request.message_attributes(name, attribute);
        }

        let output = request.send().await.map_err(|why| {
            QueueError::new(format!(
                "Could not send {}: {}",
                message.body(),
                DisplayErrorContext(why)
            ))
        })?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }

    async fn receive(&self, queue_url: &str) -> Result<Option<QueueRecord>, QueueError> {
        let output = self
            .client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(1)
            .message_attribute_names("All")
            .wait_time_seconds(WAIT_TIME_SECONDS)
            .send()
            .await
            .map_err(|why| {
                QueueError::new(format!("Could not receive: {}", DisplayErrorContext(why)))
            })?;

        Ok(output.messages().first().map(to_record))
    }

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), QueueError> {
        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|why| {
                QueueError::new(format!("Could not delete: {}", DisplayErrorContext(why)))
            })?;

        Ok(())
    }
}

fn to_record(message: &Message) -> QueueRecord {
    let attributes = message
        .message_attributes()
        .map(|attributes| {
            attributes
                .iter()
                .filter_map(|(name, value)| {
                    Some((name.clone(), value.string_value()?.to_string()))
                })
                .collect()
        })
        .unwrap_or_default();

    QueueRecord {
        body: message.body().unwrap_or_default().to_string(),
        receipt_handle: message.receipt_handle().map(str::to_string),
        attributes,
    }
}
