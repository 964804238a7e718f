mod adapters;
mod config;
mod domain;
mod ports;

use crate::adapters::inbound::create_trigger;
use crate::adapters::outbound::blob_store::init_blob_store;
use crate::adapters::outbound::card_catalog::init_card_catalog;
use crate::adapters::outbound::http_client;
use crate::adapters::outbound::image_api::init_image_api;
use crate::adapters::outbound::queue::init_queue;
use crate::adapters::outbound::secret_store::init_secret_store;
use crate::adapters::outbound::social::init_social_platform;
use crate::config::Config;
use crate::domain::app::{Acquisition, Publication};
use crate::domain::error::PublishError;
use crate::domain::functions::publish::PublishOutcome;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mtg-card-poster")]
#[command(about = "Fetches a random Magic card and posts it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a card, store its image and queue its metadata
    Acquire,
    /// Post queued cards
    Publish {
        /// Queue event JSON to read records from. Polls the queue when omitted
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            log::error!("Invalid configuration - {why}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Acquire => acquire(&config).await,
        Commands::Publish { event } => publish(&config, event).await,
    }
}

async fn acquire(config: &Config) -> ExitCode {
    let http_client = match http_client(&config.user_agent) {
        Ok(client) => client,
        Err(why) => {
            log::error!("Failed HTTP Client build - {why}");
            return ExitCode::FAILURE;
        }
    };
    let aws = aws_config::load_from_env().await;

    let acquisition = Acquisition::new(
        init_card_catalog(http_client.clone()),
        init_image_api(http_client),
        init_blob_store(&aws),
        init_queue(&aws),
        config.acquisition_settings(),
    );

    match acquisition.acquire().await {
        Ok(message) => {
            log::info!(
                "Queued '{}' ({}) as {}",
                message.name(),
                message.set_name(),
                message.body()
            );
            ExitCode::SUCCESS
        }
        Err(why) => {
            log::error!("Acquisition failed - {why}");
            ExitCode::FAILURE
        }
    }
}

async fn publish(config: &Config, event: Option<PathBuf>) -> ExitCode {
    let http_client = match http_client(&config.user_agent) {
        Ok(client) => client,
        Err(why) => {
            log::error!("Failed HTTP Client build - {why}");
            return ExitCode::FAILURE;
        }
    };
    let aws = aws_config::load_from_env().await;
    let queue = init_queue(&aws);
    let trigger = create_trigger(event, queue.clone(), config.queue_url.clone());

    let records = match trigger.records().await {
        Ok(records) => records,
        Err(why) => {
            log::error!("{why}");
            return ExitCode::FAILURE;
        }
    };

    let publication = Publication::new(
        init_secret_store(&aws),
        init_blob_store(&aws),
        queue,
        init_social_platform(http_client),
        config.publication_settings(),
    );

    let mut results = Vec::new();
    for record in records {
        let result = publication.publish(record).await;
        match &result {
            Ok(PublishOutcome::Posted { post_id }) => log::info!("Published post {post_id}"),
            Ok(PublishOutcome::PostFailed) => log::warn!("Card was not posted"),
            Err(why) => log::error!("Publication failed - {why}"),
        }
        results.push(result);
    }

    ExitCode::from(exit_status(&results))
}

/// Platform failures still count as success, any returned error does not.
fn exit_status(results: &[Result<PublishOutcome, PublishError>]) -> u8 {
    u8::from(results.iter().any(Result::is_err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::blob_store::BlobStoreError;

    fn storage_failure() -> Result<PublishOutcome, PublishError> {
        Err(PublishError::StorageAccess(BlobStoreError::new(String::from(
            "NoSuchKey",
        ))))
    }

    #[test]
    fn test_exit_status_success() {
        let results = vec![Ok(PublishOutcome::Posted {
            post_id: String::from("1445880548472328192"),
        })];
        assert_eq!(exit_status(&results), 0);
        assert_eq!(exit_status(&[]), 0);
    }

    #[test]
    fn test_exit_status_post_failure_is_success() {
        assert_eq!(exit_status(&[Ok(PublishOutcome::PostFailed)]), 0);
    }

    #[test]
    fn test_exit_status_storage_failure() {
        assert_eq!(exit_status(&[storage_failure()]), 1);
        assert_eq!(
            exit_status(&[Ok(PublishOutcome::PostFailed), storage_failure()]),
            1
        );
    }

    #[test]
    fn test_parse_acquire() {
        let cli = Cli::try_parse_from(["mtg-card-poster", "acquire"]).unwrap();
        assert!(matches!(cli.command, Commands::Acquire));
    }

    #[test]
    fn test_parse_publish() {
        let cli = Cli::try_parse_from(["mtg-card-poster", "publish", "event.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Publish { event: Some(path) } if path == PathBuf::from("event.json")
        ));

        let cli = Cli::try_parse_from(["mtg-card-poster", "publish"]).unwrap();
        assert!(matches!(cli.command, Commands::Publish { event: None }));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["mtg-card-poster", "tweet"]).is_err());
        assert!(Cli::try_parse_from(["mtg-card-poster"]).is_err());
    }
}
