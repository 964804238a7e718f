mod s3;

use crate::adapters::outbound::blob_store::s3::S3;
use crate::ports::outbound::blob_store::BlobStore;
use aws_config::SdkConfig;

#[must_use]
pub fn init_blob_store(config: &SdkConfig) -> impl BlobStore {
    S3::new(config)
}
