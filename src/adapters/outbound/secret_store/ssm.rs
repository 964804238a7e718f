use crate::ports::outbound::secret_store::{SecretStore, SecretStoreError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;

pub struct Ssm {
    client: Client,
}

impl Ssm {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SecretStore for Ssm {
    async fn get_parameter(&self, name: &str) -> Result<String, SecretStoreError> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|why| {
                SecretStoreError::new(format!(
                    "Could not read parameter {name}: {}",
                    DisplayErrorContext(why)
                ))
            })?;

        output
            .parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| SecretStoreError::new(format!("Parameter {name} has no value")))
    }
}
