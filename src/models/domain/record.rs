use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{
    domain::UserId,
    dto::request::{RecordInput, RecordPatch},
};

/// A stored Question or Quiz.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub is_correct: bool,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(text: impl Into<String>, is_correct: bool, owner: UserId) -> Self {
        let now = Utc::now();
        Record {
            id: ObjectId::new(),
            text: text.into(),
            is_correct,
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a record owned by `owner`; the payload never chooses the owner.
    pub fn from_input(input: RecordInput, owner: UserId) -> Self {
        Record::new(input.text, input.is_correct, owner)
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner == *user
    }

    /// Applies the provided fields of `patch`. Owner and id are untouched.
    pub fn apply_patch(&mut self, patch: &RecordPatch, now: DateTime<Utc>) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(is_correct) = patch.is_correct {
            self.is_correct = is_correct;
        }
        self.updated_at = now;
    }
}
