use crate::domain::app::Acquisition;
use crate::domain::card::CardRecord;
use crate::domain::error::AcquireError;
use crate::domain::functions::resolve::resolve;
use crate::domain::functions::select::select;
use crate::domain::message::CardMessage;
use crate::domain::strategy::{random_strategy, Strategy};
use crate::domain::utils::retry::retry;
use crate::ports::outbound::blob_store::BlobStore;
use crate::ports::outbound::card_catalog::CardCatalog;
use crate::ports::outbound::image_api::ImageApi;
use crate::ports::outbound::queue::Queue;
use tokio::time::Instant;

impl<CC, IA, BS, Q> Acquisition<CC, IA, BS, Q>
where
    CC: CardCatalog + Send + Sync,
    IA: ImageApi + Send + Sync,
    BS: BlobStore + Send + Sync,
    Q: Queue + Send + Sync,
{
    /// Picks a strategy, fetches a card with an image, stores the image and
    /// enqueues its metadata. Returns the message that was sent.
    pub async fn acquire(&self) -> Result<CardMessage, AcquireError> {
        let start = Instant::now();
        let strategy = self
            .settings
            .strategy
            .clone()
            .unwrap_or_else(random_strategy);
        let (min_delay, max_delay) = self.settings.retry.delay_range();
        log::info!(
            "Starting card acquisition: {strategy} (up to {} attempts, {}-{} s apart)",
            self.settings.retry.max_attempts(),
            min_delay.as_secs(),
            max_delay.as_secs()
        );

        let record = retry(&self.settings.retry, AcquireError::is_retryable, || {
            self.fetch_record(&strategy)
        })
        .await?;

        log::info!(
            "Found '{}' ({} {}) from {} [{}] by {}, {} image bytes in {} ms",
            record.name(),
            record.rarity(),
            record.type_line(),
            record.set_name(),
            record.set_code(),
            record.artist(),
            record.image().len(),
            start.elapsed().as_millis()
        );

        let bucket = &self.settings.bucket;
        let message = CardMessage::new(&record, bucket, &strategy);

        log::info!("Saving card image {} into {bucket}", message.body());
        self.blob_store
            .put(bucket, message.body(), record.into_image())
            .await?;

        log::info!("Sending card metadata to the queue");
        match self.queue.send(&self.settings.queue_url, &message).await {
            Ok(message_id) => {
                log::info!("Queued message {message_id} for {}", message.body());
                Ok(message)
            }
            Err(why) => {
                log::error!("Could not queue {}: {why}", message.body());
                self.remove_orphan(&message).await;
                Err(why.into())
            }
        }
    }

    async fn fetch_record(&self, strategy: &Strategy) -> Result<CardRecord, AcquireError> {
        let card = select(&self.catalog, strategy).await?;
        if !card.has_image() {
            log::error!(
                "No image URL for card {}, {}, pick a new one.",
                card.name,
                card.set_name
            );
            return Err(AcquireError::MissingImageData(card.name));
        }

        let image = resolve(&self.images, &card).await?;
        Ok(CardRecord::new(card, image))
    }

    /// A stored image without a queue message would never be published or
    /// cleaned up, so it is removed straight away.
    async fn remove_orphan(&self, message: &CardMessage) {
        if let Err(why) = self
            .blob_store
            .delete(message.bucket(), message.body())
            .await
        {
            log::error!(
                "Could not remove orphaned image {} from {}: {why}",
                message.body(),
                message.bucket()
            );
        }
    }
}
