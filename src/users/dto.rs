use serde::{Deserialize, Serialize};

use crate::users::repo_types::{NewUser, UserRecord};

/// Request body for signup. Every field is required.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub travel_time: String,
    pub roster: String,
}

impl From<SignupRequest> for NewUser {
    fn from(r: SignupRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            password: r.password,
            address: r.address,
            travel_time: r.travel_time,
            roster: r.roster,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub roster: Option<String>,
}

impl MatchQuery {
    /// Reads `roster` from a raw query string. The first occurrence wins and
    /// later repeats are ignored.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw.unwrap_or(""))?;
        let roster = pairs
            .into_iter()
            .find(|(key, _)| key == "roster")
            .map(|(_, value)| value);
        Ok(Self { roster })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One match, serialized as `[name, email, address, roster]`.
#[derive(Debug, Serialize)]
pub struct MatchRow(pub String, pub String, pub String, pub String);

impl From<UserRecord> for MatchRow {
    fn from(r: UserRecord) -> Self {
        Self(r.name, r.email, r.address, r.roster)
    }
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchRow>,
}
