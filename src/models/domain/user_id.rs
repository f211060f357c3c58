use std::{fmt, str::FromStr};

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Identity of an authenticated caller, and of a record's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UserId(ObjectId);

impl UserId {
    pub fn new() -> Self {
        UserId(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        UserId(oid)
    }
}

impl FromStr for UserId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(UserId)
            .map_err(|_| AppError::Unauthorized(format!("Malformed user id '{}'", s)))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
