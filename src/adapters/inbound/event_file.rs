use crate::domain::message::QueueRecord;
use crate::ports::inbound::trigger::{Trigger, TriggerError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct QueueEvent {
    #[serde(rename = "Records", default)]
    records: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    #[serde(default)]
    body: String,
    receipt_handle: Option<String>,
    #[serde(default)]
    message_attributes: HashMap<String, EventAttribute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventAttribute {
    string_value: Option<String>,
}

impl From<EventRecord> for QueueRecord {
    fn from(record: EventRecord) -> Self {
        Self {
            body: record.body,
            receipt_handle: record.receipt_handle,
            attributes: record
                .message_attributes
                .into_iter()
                .filter_map(|(name, attribute)| Some((name, attribute.string_value?)))
                .collect(),
        }
    }
}

fn parse(json: &str) -> Result<Vec<QueueRecord>, TriggerError> {
    let event: QueueEvent = serde_json::from_str(json)
        .map_err(|why| TriggerError::new(format!("Not a queue event: {why}")))?;
    Ok(event.records.into_iter().map(QueueRecord::from).collect())
}

/// A queue event saved to disk, as delivered to a function trigger.
pub struct EventFile {
    path: PathBuf,
}

impl EventFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Trigger for EventFile {
    async fn records(&self) -> Result<Vec<QueueRecord>, TriggerError> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|why| {
            TriggerError::new(format!("Could not read {}: {why}", self.path.display()))
        })?;
        parse(&json)
    }
}
