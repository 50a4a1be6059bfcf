use crate::errors::InsufficientDataError;

use super::UserStats;

/// Latest counters of a user together with how much they changed since the
/// snapshot right before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDelta {
    pub latest: UserStats,
    pub previous: UserStats,
    pub map_count_latest: u64,
    pub play_count_latest: u64,
    /// Negative when the play count went down between the two snapshots.
    pub play_count_delta: i128,
}

/// Computes the [`StatsDelta`] between the last two elements of `snapshots`,
/// which must be ordered oldest first.
///
/// Only the two trailing snapshots are looked at; anything before them does
/// not affect the result.
pub fn compute_delta<S: AsRef<UserStats>>(
    snapshots: &[S],
) -> Result<StatsDelta, InsufficientDataError> {
    let [.., previous, latest] = snapshots else {
        return Err(InsufficientDataError {
            available: snapshots.len(),
        });
    };

    let (previous, latest) = (*previous.as_ref(), *latest.as_ref());

    Ok(StatsDelta {
        latest,
        previous,
        map_count_latest: latest.map_count,
        play_count_latest: latest.play_count,
        play_count_delta: i128::from(latest.play_count) - i128::from(previous.play_count),
    })
}
