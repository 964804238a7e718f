use crate::domain::card::CardRecord;
use crate::domain::error::PublishError;
use crate::domain::strategy::Strategy;
use std::collections::HashMap;

pub const BUCKET_ATTRIBUTE: &str = "S3Bucket";
pub const NAME_ATTRIBUTE: &str = "Name";
pub const AUTHOR_ATTRIBUTE: &str = "Author";
pub const SET_ATTRIBUTE: &str = "Set";
pub const TWEET_ATTRIBUTE: &str = "Tweet";

/// Metadata handed from acquisition to publication. The body is the blob key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMessage {
    filename: String,
    bucket: String,
    name: String,
    artist: String,
    set_name: String,
    caption: String,
}

impl CardMessage {
    #[must_use]
    pub fn new(record: &CardRecord, bucket: &str, strategy: &Strategy) -> Self {
        Self {
            filename: record.filename().to_string(),
            bucket: bucket.to_string(),
            name: record.name().to_string(),
            artist: record.artist().to_string(),
            set_name: record.set_name().to_string(),
            caption: strategy.caption(),
        }
    }

    /// Rebuilds the message from a delivered record. The bucket attribute is
    /// optional and falls back to `default_bucket`.
    pub fn from_queue_record(
        record: &QueueRecord,
        default_bucket: &str,
    ) -> Result<Self, PublishError> {
        let filename = record.body.trim();
        if filename.is_empty() {
            return Err(PublishError::MalformedMessage(String::from("body")));
        }

        let bucket = record
            .attribute(BUCKET_ATTRIBUTE)
            .unwrap_or(default_bucket)
            .to_string();

        Ok(Self {
            filename: filename.to_string(),
            bucket,
            name: record.required(NAME_ATTRIBUTE)?,
            artist: record.required(AUTHOR_ATTRIBUTE)?,
            set_name: record.required(SET_ATTRIBUTE)?,
            caption: record.required(TWEET_ATTRIBUTE)?,
        })
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn attributes(&self) -> [(&'static str, &str); 5] {
        [
            (BUCKET_ATTRIBUTE, self.bucket.as_str()),
            (NAME_ATTRIBUTE, self.name.as_str()),
            (AUTHOR_ATTRIBUTE, self.artist.as_str()),
            (SET_ATTRIBUTE, self.set_name.as_str()),
            (TWEET_ATTRIBUTE, self.caption.as_str()),
        ]
    }

    #[must_use]
    pub fn post_text(&self) -> String {
        format!(
            "{}\nCard name:  {} \nSet:  {} \nArtist:  {}",
            self.caption, self.name, self.set_name, self.artist
        )
    }
}

/// One message as delivered by the queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueRecord {
    pub body: String,
    pub receipt_handle: Option<String>,
    pub attributes: HashMap<String, String>,
}

impl QueueRecord {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &str) -> Result<String, PublishError> {
        self.attribute(name)
            .map(str::to_string)
            .ok_or_else(|| PublishError::MalformedMessage(name.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::card::tests::create_test_card;
    use crate::domain::card::ResolvedImage;

    pub(crate) fn create_test_record() -> QueueRecord {
        QueueRecord {
            body: String::from("card123.png"),
            receipt_handle: Some(String::from("receipt-1")),
            attributes: HashMap::from([
                (String::from("Tweet"), String::from("caption")),
                (String::from("Name"), String::from("Island")),
                (String::from("Set"), String::from("Alpha")),
                (String::from("Author"), String::from("Artist X")),
            ]),
        }
    }

    fn create_card_record() -> CardRecord {
        CardRecord::new(
            create_test_card(),
            ResolvedImage {
                bytes: vec![1, 2, 3],
                filename: String::from("ce711943.png"),
            },
        )
    }

    #[test]
    fn test_new_message_from_record() {
        let message = CardMessage::new(&create_card_record(), "cards-bucket", &Strategy::Rare);

        assert_eq!(message.body(), "ce711943.png");
        assert_eq!(message.bucket(), "cards-bucket");
        assert_eq!(message.name(), "Lightning Bolt");
        assert_eq!(message.artist(), "Christopher Rush");
        assert_eq!(message.set_name(), "Limited Edition Alpha");
        assert_eq!(
            message.caption(),
            "Let's fetch a random Rare card from a random set #Magic #MTG !"
        );
    }

    #[test]
    fn test_attributes() {
        let message = CardMessage::new(&create_card_record(), "cards-bucket", &Strategy::Rare);
        let attributes = message.attributes();

        assert_eq!(attributes[0], ("S3Bucket", "cards-bucket"));
        assert_eq!(attributes[1], ("Name", "Lightning Bolt"));
        assert_eq!(attributes[2], ("Author", "Christopher Rush"));
        assert_eq!(attributes[3], ("Set", "Limited Edition Alpha"));
        assert!(attributes.iter().all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn test_from_queue_record_uses_default_bucket() {
        let message = CardMessage::from_queue_record(&create_test_record(), "fallback").unwrap();

        assert_eq!(message.body(), "card123.png");
        assert_eq!(message.bucket(), "fallback");
        assert_eq!(message.name(), "Island");
        assert_eq!(message.artist(), "Artist X");
        assert_eq!(message.set_name(), "Alpha");
        assert_eq!(message.caption(), "caption");
    }

    #[test]
    fn test_from_queue_record_prefers_bucket_attribute() {
        let mut record = create_test_record();
        record
            .attributes
            .insert(String::from("S3Bucket"), String::from("cards-bucket"));

        let message = CardMessage::from_queue_record(&record, "fallback").unwrap();
        assert_eq!(message.bucket(), "cards-bucket");
    }

    #[test]
    fn test_from_queue_record_missing_attribute() {
        let mut record = create_test_record();
        record.attributes.remove("Author");

        let error = CardMessage::from_queue_record(&record, "fallback").unwrap_err();
        assert!(matches!(error, PublishError::MalformedMessage(name) if name == "Author"));
    }

    #[test]
    fn test_from_queue_record_empty_body() {
        let mut record = create_test_record();
        record.body = String::from("  ");

        let error = CardMessage::from_queue_record(&record, "fallback").unwrap_err();
        assert!(matches!(error, PublishError::MalformedMessage(name) if name == "body"));
    }

    #[test]
    fn test_round_trip_through_queue_record() {
        let message = CardMessage::new(&create_card_record(), "cards-bucket", &Strategy::Vampire);
        let record = QueueRecord {
            body: message.body().to_string(),
            receipt_handle: None,
            attributes: message
                .attributes()
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        };

        assert_eq!(
            CardMessage::from_queue_record(&record, "other").unwrap(),
            message
        );
    }

    #[test]
    fn test_post_text() {
        let message = CardMessage::from_queue_record(&create_test_record(), "fallback").unwrap();

        assert_eq!(
            message.post_text(),
            "caption\nCard name:  Island \nSet:  Alpha \nArtist:  Artist X"
        );
    }
}
