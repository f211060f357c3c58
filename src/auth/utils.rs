use crate::{
    errors::{AppError, AppResult},
    models::domain::{Record, UserId},
};

/// Fails with `Forbidden` unless `caller` created `record`.
pub fn require_owner(caller: &UserId, record: &Record) -> AppResult<()> {
    if !record.is_owned_by(caller) {
        log::warn!(
            "Ownership violation: user {} attempted to modify record {} owned by {}",
            caller,
            record.id.to_hex(),
            record.owner
        );
        return Err(AppError::Forbidden {
            caller: caller.to_string(),
            owner: record.owner.to_string(),
        });
    }
    Ok(())
}
