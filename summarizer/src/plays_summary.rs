use std::fmt::{self, Display};

use domain::errors::InsufficientDataError;
use domain::models::{StatsDelta, User, UserWithStatsHistory};

/// What gets printed for one user. Holds computed values only; formatting
/// never derives anything new from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaysSummary {
    pub user: User,
    pub delta: Result<StatsDelta, InsufficientDataError>,
}

pub fn summarize(entry: UserWithStatsHistory) -> PlaysSummary {
    tracing::debug!(
        user_id = %entry.user.id,
        snapshots_count = entry.stats_history.len(),
        "summarizing plays of user"
    );
    let delta = entry.stats_history.delta();

    if let Err(error) = &delta {
        tracing::warn!(user_id = %entry.user.id, %error, "no plays summary for user");
    }

    PlaysSummary {
        user: entry.user,
        delta,
    }
}

impl Display for PlaysSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let User { id, username } = &self.user;
        writeln!(f, "{username} (#{id})")?;

        match &self.delta {
            Ok(delta) => {
                let arrow = if delta.play_count_delta < 0 { '▼' } else { '▲' };

                writeln!(f, "  {} maps fetched", delta.map_count_latest)?;
                writeln!(f, "  {} plays now", delta.play_count_latest)?;
                writeln!(f, "  {} plays last time", delta.previous.play_count)?;
                write!(
                    f,
                    "  {arrow} {} total plays for last 24 hours",
                    delta.play_count_delta
                )
            }
            Err(InsufficientDataError { available }) => {
                write!(f, "  not enough snapshots yet ({available} recorded)")
            }
        }
    }
}
