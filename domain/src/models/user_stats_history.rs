use crate::errors::InsufficientDataError;
use crate::types::TimeStamped;

use super::{compute_delta, StatsDelta, User, UserStats};

/// Snapshots of a single user, ordered oldest first, with at most one
/// snapshot per timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStatsHistory(Vec<TimeStamped<UserStats>>);

impl UserStatsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshots(snapshots: impl IntoIterator<Item = TimeStamped<UserStats>>) -> Self {
        let mut history = Self::new();
        for snapshot in snapshots {
            history.record(snapshot);
        }
        history
    }

    /// Adds `snapshot` at its chronological position. A snapshot already
    /// recorded at the same instant is replaced.
    pub fn record(&mut self, snapshot: TimeStamped<UserStats>) {
        match self
            .0
            .binary_search_by_key(&snapshot.utc_timestamp, |recorded| recorded.utc_timestamp)
        {
            Ok(index) => self.0[index] = snapshot,
            Err(index) => self.0.insert(index, snapshot),
        }
    }

    pub fn snapshots(&self) -> &[TimeStamped<UserStats>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn delta(&self) -> Result<StatsDelta, InsufficientDataError> {
        compute_delta(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithStatsHistory {
    pub user: User,
    pub stats_history: UserStatsHistory,
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at_day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, day, 12, 0, 0).unwrap()
    }

    fn snapshot(day: u32, map_count: u64, play_count: u64) -> TimeStamped<UserStats> {
        TimeStamped::new(
            UserStats {
                map_count,
                play_count,
            },
            at_day(day),
        )
    }

    #[test]
    fn snapshots_are_kept_in_chronological_order() {
        let history = UserStatsHistory::from_snapshots([
            snapshot(26, 3, 30),
            snapshot(24, 1, 10),
            snapshot(25, 2, 20),
        ]);

        let days = history
            .snapshots()
            .iter()
            .map(|s| s.utc_timestamp)
            .collect::<Vec<_>>();
        assert_eq!(days, vec![at_day(24), at_day(25), at_day(26)]);
        assert_eq!(history.snapshots().last(), Some(&snapshot(26, 3, 30)));
    }

    #[test]
    fn recording_at_an_existing_instant_replaces_the_snapshot() {
        let mut history = UserStatsHistory::from_snapshots([snapshot(24, 1, 10), snapshot(25, 2, 20)]);

        history.record(snapshot(24, 1, 15));

        assert_eq!(history.len(), 2);
        assert_eq!(history.snapshots()[0], snapshot(24, 1, 15));
    }

    #[test]
    fn delta_uses_the_two_most_recent_snapshots() {
        let mut history = UserStatsHistory::from_snapshots([snapshot(24, 10, 500)]);
        assert_eq!(history.delta(), Err(InsufficientDataError { available: 1 }));

        history.record(snapshot(25, 12, 530));
        let delta = history.delta().unwrap();

        assert_eq!(delta.map_count_latest, 12);
        assert_eq!(delta.play_count_latest, 530);
        assert_eq!(delta.play_count_delta, 30);
    }

    #[test]
    fn late_snapshot_does_not_become_the_latest() {
        let mut history = UserStatsHistory::from_snapshots([snapshot(25, 2, 200), snapshot(26, 2, 260)]);

        history.record(snapshot(24, 1, 100));

        assert_eq!(history.delta().unwrap().play_count_delta, 60);
    }

    #[test]
    fn empty_history_has_no_delta() {
        let history = UserStatsHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.delta(), Err(InsufficientDataError { available: 0 }));
    }
}
