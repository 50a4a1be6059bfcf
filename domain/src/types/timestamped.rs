use chrono::{DateTime, Utc};

/// A value observed at a particular instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStamped<T> {
    pub data: T,
    pub utc_timestamp: DateTime<Utc>,
}

impl<T> TimeStamped<T> {
    pub fn new(data: T, utc_timestamp: DateTime<Utc>) -> Self {
        Self {
            data,
            utc_timestamp,
        }
    }
}

impl<T> AsRef<T> for TimeStamped<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}
