#![deny(clippy::all, clippy::cargo)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::cargo_common_metadata)]

use std::path::Path;

use anyhow::anyhow;
use config::{AppConfig, FromEnv, SentryConfig, StatsSourceConfig, SummaryConfig};
use domain::models::{UserId, UserWithStatsHistory};
use domain::repositories::UserStatsRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::plays_summary::summarize;

mod plays_summary;

async fn stats_repository_impl(
    config: &StatsSourceConfig,
) -> anyhow::Result<impl UserStatsRepository + Sync> {
    use infra_json_repository_impl::JsonFileRepository;
    JsonFileRepository::try_new(Path::new(&config.users_json_path)).await
}

async fn users_to_summarize(
    stats_repository: &(impl UserStatsRepository + Sync),
    config: &SummaryConfig,
) -> anyhow::Result<Vec<UserWithStatsHistory>> {
    let user = match (config.user_id, &config.user_name) {
        (Some(id), _) => stats_repository
            .fetch_user(UserId(id))
            .await?
            .ok_or_else(|| anyhow!("user #{id} is not tracked"))?,
        (None, Some(name)) => stats_repository
            .fetch_user_by_name(name)
            .await?
            .ok_or_else(|| anyhow!("user {name} is not tracked"))?,
        (None, None) => return stats_repository.fetch_all_users().await,
    };

    Ok(vec![user])
}

fn init_sentry(config: &SentryConfig) -> anyhow::Result<Option<sentry::ClientInitGuard>> {
    // only send sentry events when it's not running locally
    if !config.is_enabled() {
        return Ok(None);
    }

    let guard = sentry::init(sentry::ClientOptions {
        dsn: config.dsn.as_deref().map(str::parse).transpose()?,
        release: sentry::release_name!(),
        traces_sample_rate: 0.1,
        environment: Some(config.environment_name.clone().into()),
        ..Default::default()
    });

    sentry::configure_scope(|scope| scope.set_level(Some(sentry::Level::Warning)));

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let _sentry_guard = init_sentry(&config.sentry_config)?;

    // initialize tracing
    // see https://github.com/tokio-rs/axum/blob/79a0a54bc9f0f585c974b5e6793541baff980662/examples/tracing-aka-logging/src/main.rs
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry::integrations::tracing::layer())
        .init();

    let stats_repository = stats_repository_impl(&config.stats_source_config).await?;
    let users = users_to_summarize(&stats_repository, &config.summary_config).await?;

    tracing::info!(users_count = users.len(), "summarizing plays");

    for user in users {
        println!("{}", summarize(user));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use infra_json_repository_impl::JsonFileRepository;

    const USERS_EXPORT: &str = r#"[
        { "id": 1, "username": "first", "user_stats": {} },
        { "id": 2, "username": "second", "user_stats": {} }
    ]"#;

    #[tokio::test]
    async fn summarizes_everyone_by_default() {
        let repository = JsonFileRepository::from_json_str(USERS_EXPORT).unwrap();

        let users = users_to_summarize(&repository, &SummaryConfig::default())
            .await
            .unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn summarizes_only_the_configured_user() {
        let repository = JsonFileRepository::from_json_str(USERS_EXPORT).unwrap();
        let config = SummaryConfig {
            user_name: Some("second".to_owned()),
            ..Default::default()
        };

        let users = users_to_summarize(&repository, &config).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user.username, "second");
    }

    #[tokio::test]
    async fn unknown_configured_user_is_an_error() {
        let repository = JsonFileRepository::from_json_str(USERS_EXPORT).unwrap();
        let config = SummaryConfig {
            user_name: Some("third".to_owned()),
            ..Default::default()
        };

        assert!(users_to_summarize(&repository, &config).await.is_err());
    }

    #[tokio::test]
    async fn configured_user_id_wins_over_name() {
        let repository = JsonFileRepository::from_json_str(USERS_EXPORT).unwrap();
        let config = SummaryConfig {
            user_id: Some(1),
            user_name: Some("second".to_owned()),
        };

        let users = users_to_summarize(&repository, &config).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user.username, "first");
    }

    #[tokio::test]
    async fn unknown_configured_user_id_is_an_error() {
        let repository = JsonFileRepository::from_json_str(USERS_EXPORT).unwrap();
        let config = SummaryConfig {
            user_id: Some(3),
            ..Default::default()
        };

        assert!(users_to_summarize(&repository, &config).await.is_err());
    }
}
