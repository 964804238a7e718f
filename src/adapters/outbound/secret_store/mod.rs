mod ssm;

use crate::adapters::outbound::secret_store::ssm::Ssm;
use crate::ports::outbound::secret_store::SecretStore;
use aws_config::SdkConfig;

#[must_use]
pub fn init_secret_store(config: &SdkConfig) -> impl SecretStore {
    Ssm::new(config)
}
