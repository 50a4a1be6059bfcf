use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct UserId(pub u64);

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
}
