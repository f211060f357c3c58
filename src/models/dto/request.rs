use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Body of a create request. Any `owner` key sent by the client is dropped
/// during deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordInput {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,

    pub is_correct: bool,
}

/// Body of a partial update. Absent fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    #[validate(length(min = 1, message = "text cannot be empty"))]
    pub text: Option<String>,

    pub is_correct: Option<bool>,
}

/// Pulls the payload stored under `key` out of a `{ "<key>": { ... } }` body.
pub fn take_envelope<T: DeserializeOwned>(body: Value, key: &str) -> AppResult<T> {
    let mut object = match body {
        Value::Object(object) => object,
        _ => {
            return Err(AppError::ValidationError(
                "Request body must be a JSON object".to_string(),
            ))
        }
    };

    let inner = object
        .remove(key)
        .ok_or_else(|| AppError::ValidationError(format!("Missing '{}' in request body", key)))?;

    Ok(serde_json::from_value(inner)?)
}
