use std::fmt::{Debug, Formatter};

/// Names of the secret parameters holding the social platform credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialNames {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Default for CredentialNames {
    fn default() -> Self {
        Self {
            consumer_key: String::from("/twitter/credentials/consumer_key"),
            consumer_secret: String::from("/twitter/credentials/consumer_secret"),
            access_token: String::from("/twitter/credentials/access_token"),
            access_token_secret: String::from("/twitter/credentials/access_token_secret"),
        }
    }
}

impl CredentialNames {
    #[must_use]
    pub fn all(&self) -> [&str; 4] {
        [
            self.consumer_key.as_str(),
            self.consumer_secret.as_str(),
            self.access_token.as_str(),
            self.access_token_secret.as_str(),
        ]
    }
}

/// OAuth 1.0a consumer pair plus access token pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}
