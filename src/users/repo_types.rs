use sqlx::FromRow;

/// A user as received from signup, before it has an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String, // stored as received
    pub address: String,
    pub travel_time: String,
    pub roster: String,
}

/// Row returned by the roster lookup.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub address: String,
    pub roster: String,
}
