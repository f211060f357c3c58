use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id, hex ObjectId)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user_id: &UserId, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_hex(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
