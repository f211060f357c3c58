use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Record,
};

/// Client-facing shape of a record; ids are rendered as hex strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        RecordDto {
            id: record.id.to_hex(),
            text: record.text,
            is_correct: record.is_correct,
            owner: record.owner.to_hex(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Wraps `value` as `{ "<key>": value }`.
pub fn envelope<T: Serialize>(key: &str, value: T) -> AppResult<Value> {
    let mut object = Map::new();
    let value = serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize response: {}", e)))?;
    object.insert(key.to_string(), value);
    Ok(Value::Object(object))
}
