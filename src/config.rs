use crate::domain::app::{AcquisitionSettings, PublicationSettings};
use crate::domain::credentials::CredentialNames;
use crate::domain::strategy::Strategy;
use crate::domain::utils::retry::RetryPolicy;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_USER_AGENT: &str = "MTG Card Poster";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} wasn't in env vars")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub queue_url: String,
    pub credential_names: CredentialNames,
    pub retry: RetryPolicy,
    pub strategy: Option<Strategy>,
    pub delete_message: bool,
    pub temp_dir: PathBuf,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any name to value lookup. Blank values count
    /// as unset.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let defaults = CredentialNames::default();
        let credential_names = CredentialNames {
            consumer_key: get("TWITTER_CONSUMER_KEY_PARAM").unwrap_or(defaults.consumer_key),
            consumer_secret: get("TWITTER_CONSUMER_SECRET_PARAM")
                .unwrap_or(defaults.consumer_secret),
            access_token: get("TWITTER_ACCESS_TOKEN_PARAM").unwrap_or(defaults.access_token),
            access_token_secret: get("TWITTER_ACCESS_TOKEN_SECRET_PARAM")
                .unwrap_or(defaults.access_token_secret),
        };

        let attempts = parse(&get, "RETRY_ATTEMPTS", RetryPolicy::DEFAULT_ATTEMPTS)?;
        let min_delay = parse(
            &get,
            "RETRY_MIN_DELAY_SECS",
            RetryPolicy::DEFAULT_MIN_DELAY.as_secs(),
        )?;
        let max_delay = parse(
            &get,
            "RETRY_MAX_DELAY_SECS",
            RetryPolicy::DEFAULT_MAX_DELAY.as_secs(),
        )?;

        let strategy = get("ACQUIRE_STRATEGY")
            .map(|value| {
                Strategy::from_str(&value).map_err(|why| ConfigError::Invalid {
                    name: "ACQUIRE_STRATEGY",
                    value,
                    reason: why.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            bucket: required("BUCKET_NAME")?,
            queue_url: required("QUEUE_URL")?,
            credential_names,
            retry: RetryPolicy::new(
                attempts,
                Duration::from_secs(min_delay),
                Duration::from_secs(max_delay),
            ),
            strategy,
            delete_message: parse(&get, "DELETE_QUEUE_MESSAGE", true)?,
            temp_dir: get("TEMP_DIR").map_or_else(env::temp_dir, PathBuf::from),
            user_agent: get("HTTP_USER_AGENT").unwrap_or_else(|| String::from(DEFAULT_USER_AGENT)),
        })
    }

    #[must_use]
    pub fn acquisition_settings(&self) -> AcquisitionSettings {
        AcquisitionSettings {
            bucket: self.bucket.clone(),
            queue_url: self.queue_url.clone(),
            retry: self.retry.clone(),
            strategy: self.strategy.clone(),
        }
    }

    #[must_use]
    pub fn publication_settings(&self) -> PublicationSettings {
        PublicationSettings {
            bucket: self.bucket.clone(),
            queue_url: self.queue_url.clone(),
            credential_names: self.credential_names.clone(),
            temp_dir: self.temp_dir.clone(),
            delete_message: self.delete_message,
        }
    }
}

fn parse<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|why: T::Err| ConfigError::Invalid {
            name,
            reason: why.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("BUCKET_NAME", "cards-bucket"),
        ("QUEUE_URL", "https://sqs.eu-west-1.amazonaws.com/123456789012/cards"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.bucket, "cards-bucket");
        assert_eq!(config.credential_names, CredentialNames::default());
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.strategy, None);
        assert!(config.delete_message);
        assert_eq!(config.temp_dir, env::temp_dir());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_missing_bucket() {
        let error = Config::from_lookup(lookup(&[REQUIRED[1]])).unwrap_err();
        assert_eq!(error, ConfigError::Missing("BUCKET_NAME"));
        assert_eq!(error.to_string(), "BUCKET_NAME wasn't in env vars");
    }

    #[test]
    fn test_blank_queue_url_is_missing() {
        let error =
            Config::from_lookup(lookup(&[REQUIRED[0], ("QUEUE_URL", "  ")])).unwrap_err();
        assert_eq!(error, ConfigError::Missing("QUEUE_URL"));
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("TWITTER_CONSUMER_KEY_PARAM", "/bot/key"),
            ("RETRY_ATTEMPTS", "5"),
            ("RETRY_MIN_DELAY_SECS", "1"),
            ("RETRY_MAX_DELAY_SECS", "2"),
            ("ACQUIRE_STRATEGY", "artist:magali-villeneuve"),
            ("DELETE_QUEUE_MESSAGE", "false"),
            ("TEMP_DIR", "/tmp/cards"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.credential_names.consumer_key, "/bot/key");
        assert_eq!(
            config.credential_names.consumer_secret,
            "/twitter/credentials/consumer_secret"
        );
        assert_eq!(config.retry.max_attempts(), 5);
        assert_eq!(
            config.retry.delay_range(),
            (Duration::from_secs(1), Duration::from_secs(2))
        );
        assert!(config.strategy.is_some());
        assert!(!config.delete_message);
        assert_eq!(config.temp_dir, PathBuf::from("/tmp/cards"));
    }

    #[test]
    fn test_invalid_number() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("RETRY_ATTEMPTS", "lots"));

        let error = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid { name: "RETRY_ATTEMPTS", .. }
        ));
    }

    #[test]
    fn test_invalid_strategy() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("ACQUIRE_STRATEGY", "goblins"));

        let error = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "ACQUIRE_STRATEGY has an invalid value 'goblins': Unknown strategy 'goblins'"
        );
    }

    #[test]
    fn test_settings() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        let acquisition = config.acquisition_settings();
        assert_eq!(acquisition.bucket, "cards-bucket");
        assert_eq!(acquisition.retry.max_attempts(), 30);

        let publication = config.publication_settings();
        assert_eq!(publication.queue_url, config.queue_url);
        assert!(publication.delete_message);
    }
}
