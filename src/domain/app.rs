use crate::domain::credentials::CredentialNames;
use crate::domain::strategy::Strategy;
use crate::domain::utils::retry::RetryPolicy;
use crate::ports::outbound::blob_store::BlobStore;
use crate::ports::outbound::card_catalog::CardCatalog;
use crate::ports::outbound::image_api::ImageApi;
use crate::ports::outbound::queue::Queue;
use crate::ports::outbound::secret_store::SecretStore;
use crate::ports::outbound::social::SocialPlatform;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AcquisitionSettings {
    pub bucket: String,
    pub queue_url: String,
    pub retry: RetryPolicy,
    /// Forces a strategy instead of picking one at random.
    pub strategy: Option<Strategy>,
}

/// Fetches a card and hands it over to the publishing side.
pub struct Acquisition<CC, IA, BS, Q> {
    pub catalog: CC,
    pub images: IA,
    pub blob_store: BS,
    pub queue: Q,
    pub settings: AcquisitionSettings,
}

impl<CC, IA, BS, Q> Acquisition<CC, IA, BS, Q>
where
    CC: CardCatalog + Send + Sync,
    IA: ImageApi + Send + Sync,
    BS: BlobStore + Send + Sync,
    Q: Queue + Send + Sync,
{
    pub fn new(
        catalog: CC,
        images: IA,
        blob_store: BS,
        queue: Q,
        settings: AcquisitionSettings,
    ) -> Self {
        Self {
            catalog,
            images,
            blob_store,
            queue,
            settings,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PublicationSettings {
    pub bucket: String,
    pub queue_url: String,
    pub credential_names: CredentialNames,
    pub temp_dir: PathBuf,
    pub delete_message: bool,
}

/// Posts stored cards to the social platform.
pub struct Publication<SS, BS, Q, SP> {
    pub secrets: SS,
    pub blob_store: BS,
    pub queue: Q,
    pub platform: SP,
    pub settings: PublicationSettings,
}

impl<SS, BS, Q, SP> Publication<SS, BS, Q, SP>
where
    SS: SecretStore + Send + Sync,
    BS: BlobStore + Send + Sync,
    Q: Queue + Send + Sync,
    SP: SocialPlatform + Send + Sync,
{
    pub fn new(
        secrets: SS,
        blob_store: BS,
        queue: Q,
        platform: SP,
        settings: PublicationSettings,
    ) -> Self {
        Self {
            secrets,
            blob_store,
            queue,
            platform,
            settings,
        }
    }
}
