use crate::{errors::AppResult, models::domain::UserId};

/// Turns a bearer credential into the caller's identity.
pub trait IdentityProvider: Send + Sync {
    fn authenticate(&self, credential: &str) -> AppResult<UserId>;
}
