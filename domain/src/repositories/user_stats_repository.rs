use crate::models::{UserId, UserWithStatsHistory};

#[async_trait::async_trait]
pub trait UserStatsRepository {
    async fn fetch_all_users(&self) -> anyhow::Result<Vec<UserWithStatsHistory>>;

    async fn fetch_user(&self, id: UserId) -> anyhow::Result<Option<UserWithStatsHistory>>;

    async fn fetch_user_by_name(&self, name: &str)
        -> anyhow::Result<Option<UserWithStatsHistory>>;
}
