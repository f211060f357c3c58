#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizbook_server::{
    app_state::AppState,
    auth::JwtService,
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{ListScope, Record},
        dto::request::RecordPatch,
    },
    repositories::{RecordFilter, RecordRepository},
};

/// Insertion-ordered store standing in for a MongoDB collection.
pub struct InMemoryRecordRepository {
    records: Arc<RwLock<Vec<Record>>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn create(&self, record: Record) -> AppResult<Record> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(AppError::DatabaseError(format!(
                "Duplicate key '{}'",
                record.id.to_hex()
            )));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == *id).cloned())
    }

    async fn find_all(&self, filter: RecordFilter) -> AppResult<Vec<Record>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| filter.owner.map(|owner| r.owner == owner).unwrap_or(true))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &ObjectId, patch: RecordPatch) -> AppResult<()> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| AppError::NotFound(format!("Record with id '{}' not found", id)))?;

        record.apply_patch(&patch, Utc::now());
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != *id);

        if records.len() == before {
            return Err(AppError::NotFound(format!("Record with id '{}' not found", id)));
        }
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn test_config() -> Config {
    let mut config = Config::from_env();
    config.jwt_secret = SecretString::from("integration_test_secret_key_0123456789".to_string());
    config.jwt_expiration_hours = 1;
    config.questions_list_scope = ListScope::All;
    config.quizzes_list_scope = ListScope::Owner;
    config
}

pub struct TestContext {
    pub state: AppState,
    pub jwt: JwtService,
    pub questions: Arc<InMemoryRecordRepository>,
    pub quizzes: Arc<InMemoryRecordRepository>,
}

pub fn test_context() -> TestContext {
    let config = test_config();
    let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let questions = Arc::new(InMemoryRecordRepository::new());
    let quizzes = Arc::new(InMemoryRecordRepository::new());

    let state = AppState::from_parts(
        config,
        questions.clone(),
        quizzes.clone(),
        Arc::new(jwt.clone()),
    );

    TestContext {
        state,
        jwt,
        questions,
        quizzes,
    }
}
