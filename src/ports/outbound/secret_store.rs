use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
#[error("Error reading secret parameter: {0}")]
pub struct SecretStoreError(String);

impl SecretStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SecretStore {
    /// Values are always returned decrypted.
    async fn get_parameter(&self, name: &str) -> Result<String, SecretStoreError>;
}
