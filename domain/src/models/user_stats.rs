/// Counters of a single user sampled at one point in time.
///
/// Both counters grow over time in practice, but nothing here relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub map_count: u64,
    pub play_count: u64,
}

impl AsRef<UserStats> for UserStats {
    fn as_ref(&self) -> &UserStats {
        self
    }
}
