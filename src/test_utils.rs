#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        auth::JwtService,
        config::Config,
        models::domain::{Record, UserId},
        repositories::MockRecordRepository,
    };

    /// Builds an `AppState` over the given mocks, plus a token issuer
    /// sharing its secret.
    pub fn test_state(
        questions: MockRecordRepository,
        quizzes: MockRecordRepository,
    ) -> (AppState, JwtService) {
        let config = Config::test_config();
        let jwt = JwtService::new(&config.jwt_secret, 1);
        let state = AppState::from_parts(
            config,
            Arc::new(questions),
            Arc::new(quizzes),
            Arc::new(jwt.clone()),
        );
        (state, jwt)
    }

    /// Creates a record owned by a fresh user
    pub fn test_record(text: &str) -> Record {
        Record::new(text, true, UserId::new())
    }

    /// Creates multiple records owned by the same user
    pub fn test_records_for(owner: UserId) -> Vec<Record> {
        vec![
            Record::new("Is Rust memory safe?", true, owner),
            Record::new("Is the sky green?", false, owner),
            Record::new("Does 2 + 2 equal 4?", true, owner),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserId;

    #[test]
    fn test_fixtures_test_record() {
        let record = test_record("Q1");
        assert_eq!(record.text, "Q1");
        assert!(record.is_correct);
    }

    #[test]
    fn test_fixtures_test_records_for() {
        let owner = UserId::new();
        let records = test_records_for(owner);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.is_owned_by(&owner)));
    }
}
