use crate::domain::app::Publication;
use crate::domain::credentials::Credentials;
use crate::domain::error::PublishError;
use crate::domain::message::{CardMessage, QueueRecord, BUCKET_ATTRIBUTE};
use crate::domain::utils::cleanup::with_cleanup;
use crate::domain::utils::temp_file::TempImage;
use crate::ports::outbound::blob_store::BlobStore;
use crate::ports::outbound::queue::Queue;
use crate::ports::outbound::secret_store::{SecretStore, SecretStoreError};
use crate::ports::outbound::social::{PlatformError, SocialPlatform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Posted { post_id: String },
    /// The platform rejected the post. Logged and not treated as fatal.
    PostFailed,
}

impl<SS, BS, Q, SP> Publication<SS, BS, Q, SP>
where
    SS: SecretStore + Send + Sync,
    BS: BlobStore + Send + Sync,
    Q: Queue + Send + Sync,
    SP: SocialPlatform + Send + Sync,
{
    /// Posts the card referenced by `record`. The stored image is deleted on
    /// every exit path. Storage and credential failures are returned, platform
    /// failures only logged.
    pub async fn publish(&self, record: QueueRecord) -> Result<PublishOutcome, PublishError> {
        let key = record.body.trim().to_string();
        if key.is_empty() {
            log::error!("Received a queue record without a body, nothing to publish");
            return Err(PublishError::MalformedMessage(String::from("body")));
        }

        let bucket = record
            .attribute(BUCKET_ATTRIBUTE)
            .unwrap_or(&self.settings.bucket)
            .to_string();
        log::info!("Publishing card image {key} from {bucket}");

        with_cleanup(
            self.post_card(&record),
            self.clean_up(&record, &bucket, &key),
        )
        .await
    }

    async fn post_card(&self, record: &QueueRecord) -> Result<PublishOutcome, PublishError> {
        let message = CardMessage::from_queue_record(record, &self.settings.bucket)?;

        let credentials = self.fetch_credentials().await?;
        log::debug!("Fetched platform credentials");

        let image = match self.download(&message).await {
            Ok(image) => image,
            Err(why) => {
                log::error!("Error while trying to download {}: {why}", message.body());
                return Err(why);
            }
        };
        let bytes = image.read().await?;

        match self.send_post(&credentials, &message, bytes).await {
            Ok(post_id) => {
                log::info!("Posted '{}' as {post_id}", message.name());
                Ok(PublishOutcome::Posted { post_id })
            }
            Err(why) => {
                log::error!("Error while trying to send a tweet: {why}");
                Ok(PublishOutcome::PostFailed)
            }
        }
    }

    async fn fetch_credentials(&self) -> Result<Credentials, SecretStoreError> {
        let names = &self.settings.credential_names;
        Ok(Credentials {
            consumer_key: self.secrets.get_parameter(&names.consumer_key).await?,
            consumer_secret: self.secrets.get_parameter(&names.consumer_secret).await?,
            access_token: self.secrets.get_parameter(&names.access_token).await?,
            access_token_secret: self
                .secrets
                .get_parameter(&names.access_token_secret)
                .await?,
        })
    }

    async fn download(&self, message: &CardMessage) -> Result<TempImage, PublishError> {
        let bytes = self
            .blob_store
            .get(message.bucket(), message.body())
            .await?;
        let image = TempImage::write(&self.settings.temp_dir, message.body(), &bytes).await?;
        log::debug!("Downloaded {} to {}", message.body(), image.path().display());
        Ok(image)
    }

    async fn send_post(
        &self,
        credentials: &Credentials,
        message: &CardMessage,
        image: Vec<u8>,
    ) -> Result<String, PlatformError> {
        let media = self
            .platform
            .upload_media(credentials, message.body(), image)
            .await?;
        self.platform
            .post(credentials, &message.post_text(), &[media])
            .await
    }

    async fn clean_up(&self, record: &QueueRecord, bucket: &str, key: &str) {
        match self.blob_store.delete(bucket, key).await {
            Ok(()) => log::info!("Deleted {key} from {bucket}"),
            Err(why) => log::warn!("Could not delete {key} from {bucket}: {why}"),
        }

        if !self.settings.delete_message {
            return;
        }

        let Some(receipt_handle) = &record.receipt_handle else {
            return;
        };
        if let Err(why) = self
            .queue
            .delete(&self.settings.queue_url, receipt_handle)
            .await
        {
            log::warn!("Could not delete queue message for {key}: {why}");
        }
    }
}
