use anyhow::Result;
use envy::Error;
use serde::Deserialize;

pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, Error>;
}

trait FromEnvLikeKeyValuePairs: Sized {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error>;
}

impl<T: FromEnvLikeKeyValuePairs> FromEnv for T {
    fn from_env() -> Result<Self, Error> {
        // std::env::Vars is not Clone
        Self::from_iter(std::env::vars().collect::<Vec<_>>().into_iter())
    }
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub stats_source_config: StatsSourceConfig,
    pub sentry_config: SentryConfig,
    pub summary_config: SummaryConfig,
}

impl FromEnvLikeKeyValuePairs for AppConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        Ok(Self {
            stats_source_config: StatsSourceConfig::from_iter(iter.clone())?,
            sentry_config: SentryConfig::from_iter(iter.clone())?,
            summary_config: SummaryConfig::from_iter(iter)?,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct StatsSourceConfig {
    pub users_json_path: String,
}

#[derive(Deserialize, Debug)]
pub struct SentryConfig {
    pub environment_name: String,
    pub dsn: Option<String>,
}

impl SentryConfig {
    pub fn is_enabled(&self) -> bool {
        self.dsn.is_some() && self.environment_name != "local"
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SummaryConfig {
    /// Only this user is summarized when set. Takes precedence over `user_name`.
    pub user_id: Option<u64>,
    /// Only this user is summarized when set.
    pub user_name: Option<String>,
}

impl FromEnvLikeKeyValuePairs for StatsSourceConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("STATS_SOURCE_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for SentryConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("SENTRY_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for SummaryConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("SUMMARY_").from_iter(iter)
    }
}
