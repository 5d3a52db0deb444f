// Session domain model - the state carried in the signed cookie
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub logged_in: bool,
    /// Unix seconds at issue time; informational, no expiry is enforced.
    #[serde(default)]
    pub issued_at: i64,
}

impl Session {
    pub fn authenticated() -> Self {
        Self {
            logged_in: true,
            issued_at: chrono::Utc::now().timestamp(),
        }
    }
}
