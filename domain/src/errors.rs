use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("at least 2 snapshots are required to compute a delta, got {available}")]
pub struct InsufficientDataError {
    pub available: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedSnapshotError {
    #[error("snapshot at {key:?} is not an object")]
    NotAnObject { key: String },
    #[error("snapshot at {key:?} is missing field `{field}`")]
    MissingField { key: String, field: &'static str },
    #[error("snapshot at {key:?} has a non-numeric value in field `{field}`")]
    NonNumericField { key: String, field: &'static str },
    #[error("snapshot key {key:?} is not an RFC 3339 timestamp")]
    InvalidTimestamp { key: String },
    #[error("snapshot key {key:?} names an instant already used by another key")]
    DuplicateTimestamp { key: String },
}
