use std::env;
use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ListScope,
};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub quizzes_collection: String,
    pub questions_list_scope: ListScope,
    pub quizzes_list_scope: ListScope,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizbook-local".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            questions_list_scope: env::var("QUESTIONS_LIST_SCOPE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(ListScope::All),
            quizzes_list_scope: env::var("QUIZZES_LIST_SCOPE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(ListScope::Owner),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects signing secrets that are unsafe outside local development.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEFAULT_JWT_SECRET {
            return Err(AppError::ValidationError(
                "JWT_SECRET is using the default value".to_string(),
            ));
        }

        if jwt_secret.len() < 32 {
            return Err(AppError::ValidationError(format!(
                "JWT_SECRET is too short ({}), must be at least 32 characters",
                jwt_secret.len()
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizbook-test".to_string(),
            questions_collection: "questions".to_string(),
            quizzes_collection: "quizzes".to_string(),
            questions_list_scope: ListScope::All,
            quizzes_list_scope: ListScope::Owner,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
        }
    }
}
