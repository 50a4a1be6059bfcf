use std::fmt::Debug;
use std::path::Path;

use anyhow::Context;
use domain::models::{User, UserId, UserWithStatsHistory};
use domain::repositories::UserStatsRepository;
use serde::Deserialize;
use serde_json::{Map, Value};

mod stats_json;

pub use stats_json::decode_user_stats_history;

/// One row of the users export.
#[derive(Deserialize)]
struct UserRow {
    id: u64,
    username: String,
    user_stats: Map<String, Value>,
}

impl UserRow {
    fn into_user_with_stats_history(self) -> anyhow::Result<UserWithStatsHistory> {
        let stats_history = decode_user_stats_history(&self.user_stats)
            .with_context(|| format!("user {} has malformed stats", self.id))?;

        Ok(UserWithStatsHistory {
            user: User {
                id: UserId(self.id),
                username: self.username,
            },
            stats_history,
        })
    }
}

/// Serves users from a JSON export of the users table, decoded once up front.
pub struct JsonFileRepository {
    users: Vec<UserWithStatsHistory>,
}

impl Debug for JsonFileRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileRepository")
            .field("users_count", &self.users.len())
            .finish()
    }
}

impl JsonFileRepository {
    #[tracing::instrument]
    pub async fn try_new(path: &Path) -> anyhow::Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read users export at {}", path.display()))?;

        let repository = Self::from_json_str(&json)?;
        tracing::info!(users_count = repository.users.len(), "loaded users export");

        Ok(repository)
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let rows: Vec<UserRow> = serde_json::from_str(json).context("users export is not valid")?;

        let users = rows
            .into_iter()
            .map(UserRow::into_user_with_stats_history)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { users })
    }
}

#[async_trait::async_trait]
impl UserStatsRepository for JsonFileRepository {
    #[tracing::instrument(skip(self))]
    async fn fetch_all_users(&self) -> anyhow::Result<Vec<UserWithStatsHistory>> {
        Ok(self.users.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_user(&self, id: UserId) -> anyhow::Result<Option<UserWithStatsHistory>> {
        Ok(self.users.iter().find(|entry| entry.user.id == id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_user_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<UserWithStatsHistory>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.user.username == name)
            .cloned())
    }
}
