mod stats_delta;
mod user;
mod user_stats;
mod user_stats_history;

pub use stats_delta::{compute_delta, StatsDelta};
pub use user::{User, UserId};
pub use user_stats::UserStats;
pub use user_stats_history::{UserStatsHistory, UserWithStatsHistory};
