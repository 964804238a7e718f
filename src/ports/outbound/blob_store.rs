use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
#[error("Error in blob store operation: {0}")]
pub struct BlobStoreError(String);

impl BlobStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore {
    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<(), BlobStoreError>;
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, BlobStoreError>;
    async fn delete(&self, bucket: &str, key: &str) -> Result<(), BlobStoreError>;
}
