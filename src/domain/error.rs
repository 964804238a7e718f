use crate::domain::utils::retry::RetryError;
use crate::ports::outbound::blob_store::BlobStoreError;
use crate::ports::outbound::card_catalog::CatalogError;
use crate::ports::outbound::image_api::ImageApiError;
use crate::ports::outbound::queue::QueueError;
use crate::ports::outbound::secret_store::SecretStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("No cards matched the query for '{0}'")]
    NoMatch(String),
    #[error("No usable image for card '{0}'")]
    MissingImageData(String),
    #[error("No exact image match for '{name}' in set {set_code}")]
    ImageNotFound { name: String, set_code: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    ImageApi(#[from] ImageApiError),
    #[error(transparent)]
    StorageAccess(#[from] BlobStoreError),
    #[error(transparent)]
    QueuePublish(#[from] QueueError),
    #[error("Gave up after {attempts} attempts, last error: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<AcquireError>,
    },
}

impl AcquireError {
    /// Upstream lookups are retried, anything touching our own storage is not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AcquireError::NoMatch(_)
                | AcquireError::MissingImageData(_)
                | AcquireError::ImageNotFound { .. }
                | AcquireError::Catalog(_)
                | AcquireError::ImageApi(_)
        )
    }
}

impl From<RetryError<AcquireError>> for AcquireError {
    fn from(error: RetryError<AcquireError>) -> Self {
        match error {
            RetryError::Exhausted { attempts, last } => AcquireError::RetriesExhausted {
                attempts,
                last: Box::new(last),
            },
            RetryError::Fatal(why) => why,
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Queue record is missing '{0}'")]
    MalformedMessage(String),
    #[error(transparent)]
    SecretAccess(#[from] SecretStoreError),
    #[error(transparent)]
    StorageAccess(#[from] BlobStoreError),
    #[error("Could not stage image locally: {0}")]
    LocalFile(#[from] std::io::Error),
}
