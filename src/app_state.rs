use std::sync::Arc;

use crate::{
    auth::{IdentityProvider, JwtService},
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::ResourceKind,
    repositories::{MongoRecordRepository, RecordRepository},
    services::RecordService,
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<RecordService>,
    pub quiz_service: Arc<RecordService>,
    pub identity_provider: Arc<dyn IdentityProvider>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository =
            Arc::new(MongoRecordRepository::new(&db, &config.questions_collection));
        question_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoRecordRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        Ok(Self::from_parts(
            config,
            question_repository,
            quiz_repository,
            Arc::new(jwt_service),
        ))
    }

    /// Wires the services over arbitrary store and identity adapters.
    pub fn from_parts(
        config: Config,
        question_repository: Arc<dyn RecordRepository>,
        quiz_repository: Arc<dyn RecordRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        let question_service = Arc::new(RecordService::with_list_scope(
            ResourceKind::QUESTION,
            config.questions_list_scope,
            question_repository,
        ));
        let quiz_service = Arc::new(RecordService::with_list_scope(
            ResourceKind::QUIZ,
            config.quizzes_list_scope,
            quiz_repository,
        ));

        Self {
            question_service,
            quiz_service,
            identity_provider,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::domain::ListScope, repositories::MockRecordRepository};

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_from_parts_applies_configured_scopes() {
        let mut config = Config::test_config();
        config.questions_list_scope = ListScope::Owner;

        let jwt = JwtService::new(&config.jwt_secret, 1);
        let state = AppState::from_parts(
            config,
            Arc::new(MockRecordRepository::new()),
            Arc::new(MockRecordRepository::new()),
            Arc::new(jwt),
        );

        assert_eq!(state.question_service.kind(), &ResourceKind::QUESTION);
        assert_eq!(state.question_service.list_scope(), ListScope::Owner);
        assert_eq!(state.quiz_service.list_scope(), ListScope::Owner);
    }
}
