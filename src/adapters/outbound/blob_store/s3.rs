use crate::ports::outbound::blob_store::{BlobStore, BlobStoreError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

pub struct S3 {
    client: Client,
}

impl S3 {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl BlobStore for S3 {
    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<(), BlobStoreError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|why| {
                BlobStoreError::new(format!(
                    "Upload of s3://{bucket}/{key} failed: {}",
                    DisplayErrorContext(why)
                ))
            })?;

        log::info!("Uploaded {size} bytes to s3://{bucket}/{key}");
        Ok(())
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, BlobStoreError> {
        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|why| {
                BlobStoreError::new(format!(
                    "Download of s3://{bucket}/{key} failed: {}",
                    DisplayErrorContext(why)
                ))
            })?;

        let data = object.body.collect().await.map_err(|why| {
            BlobStoreError::new(format!("Reading s3://{bucket}/{key} failed: {why}"))
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), BlobStoreError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|why| {
                BlobStoreError::new(format!(
                    "Delete of s3://{bucket}/{key} failed: {}",
                    DisplayErrorContext(why)
                ))
            })?;

        Ok(())
    }
}
