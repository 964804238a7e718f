use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Error)]
#[error("Error Retrieving Image: {0}")]
pub struct ImageApiError(String);

impl ImageApiError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageApi {
    async fn find_exact(&self, name: &str, set_code: &str)
        -> Result<Option<ImageEntry>, ImageApiError>;
    async fn download(&self, url: &str) -> Result<Vec<u8>, ImageApiError>;
}
