use crate::domain::credentials::Credentials;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaId(pub String);

#[derive(Debug, Error)]
#[error("Error posting to the social platform: {0}")]
pub struct PlatformError(String);

impl PlatformError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SocialPlatform {
    async fn upload_media(
        &self,
        credentials: &Credentials,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<MediaId, PlatformError>;
    /// Returns the id of the created post.
    async fn post(
        &self,
        credentials: &Credentials,
        text: &str,
        media: &[MediaId],
    ) -> Result<String, PlatformError>;
}
