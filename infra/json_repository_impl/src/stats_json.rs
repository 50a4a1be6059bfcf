use std::collections::HashSet;

use chrono::{DateTime, Utc};
use domain::errors::MalformedSnapshotError;
use domain::models::{UserStats, UserStatsHistory};
use domain::types::TimeStamped;
use serde_json::{Map, Value};

/// Decodes the stored form of a user's history: a JSON object mapping RFC 3339
/// timestamps to `{ "map_count": .., "play_count": .. }` objects.
///
/// Key order in the object does not matter; the resulting history is ordered
/// by timestamp. Two keys naming the same instant in different offsets are
/// rejected.
pub fn decode_user_stats_history(
    raw: &Map<String, Value>,
) -> Result<UserStatsHistory, MalformedSnapshotError> {
    let mut seen_instants = HashSet::with_capacity(raw.len());
    let mut snapshots = Vec::with_capacity(raw.len());

    for (key, value) in raw {
        let snapshot = decode_snapshot(key, value)?;
        if !seen_instants.insert(snapshot.utc_timestamp) {
            return Err(MalformedSnapshotError::DuplicateTimestamp { key: key.clone() });
        }
        snapshots.push(snapshot);
    }

    Ok(UserStatsHistory::from_snapshots(snapshots))
}

fn decode_snapshot(
    key: &str,
    value: &Value,
) -> Result<TimeStamped<UserStats>, MalformedSnapshotError> {
    let utc_timestamp = DateTime::parse_from_rfc3339(key)
        .map_err(|_| MalformedSnapshotError::InvalidTimestamp {
            key: key.to_owned(),
        })?
        .with_timezone(&Utc);

    let fields = value
        .as_object()
        .ok_or_else(|| MalformedSnapshotError::NotAnObject {
            key: key.to_owned(),
        })?;

    let counter = |field: &'static str| -> Result<u64, MalformedSnapshotError> {
        fields
            .get(field)
            .ok_or_else(|| MalformedSnapshotError::MissingField {
                key: key.to_owned(),
                field,
            })?
            .as_u64()
            .ok_or_else(|| MalformedSnapshotError::NonNumericField {
                key: key.to_owned(),
                field,
            })
    };

    Ok(TimeStamped::new(
        UserStats {
            map_count: counter("map_count")?,
            play_count: counter("play_count")?,
        },
        utc_timestamp,
    ))
}
