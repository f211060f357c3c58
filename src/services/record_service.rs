use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    auth::require_owner,
    errors::{AppError, AppResult},
    models::{
        domain::{ListScope, Record, ResourceKind, UserId},
        dto::request::{RecordInput, RecordPatch},
    },
    repositories::{RecordFilter, RecordRepository},
};

/// Ownership-gated CRUD for one resource kind.
pub struct RecordService {
    kind: ResourceKind,
    list_scope: ListScope,
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(kind: ResourceKind, repository: Arc<dyn RecordRepository>) -> Self {
        Self::with_list_scope(kind, kind.default_list_scope, repository)
    }

    pub fn with_list_scope(
        kind: ResourceKind,
        list_scope: ListScope,
        repository: Arc<dyn RecordRepository>,
    ) -> Self {
        Self {
            kind,
            list_scope,
            repository,
        }
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub fn list_scope(&self) -> ListScope {
        self.list_scope
    }

    pub async fn create(&self, caller: &UserId, input: RecordInput) -> AppResult<Record> {
        input.validate()?;

        let record = self
            .repository
            .create(Record::from_input(input, *caller))
            .await?;

        log::info!(
            "{} {} created by {}",
            self.kind.name,
            record.id.to_hex(),
            caller
        );
        Ok(record)
    }

    pub async fn list(&self, caller: &UserId) -> AppResult<Vec<Record>> {
        let filter = match self.list_scope {
            ListScope::All => RecordFilter::default(),
            ListScope::Owner => RecordFilter::owned_by(*caller),
        };

        let records = self.repository.find_all(filter).await?;
        log::debug!(
            "Listed {} {} for {} (scope: {})",
            records.len(),
            self.kind.plural,
            caller,
            self.list_scope
        );
        Ok(records)
    }

    pub async fn show(&self, id: &str) -> AppResult<Record> {
        self.find_or_404(id).await
    }

    pub async fn update(&self, caller: &UserId, id: &str, patch: RecordPatch) -> AppResult<()> {
        patch.validate()?;

        let record = self.find_or_404(id).await?;
        require_owner(caller, &record)?;

        self.repository.update(&record.id, patch).await?;
        log::debug!("{} {} updated by {}", self.kind.name, id, caller);
        Ok(())
    }

    pub async fn delete(&self, caller: &UserId, id: &str) -> AppResult<()> {
        let record = self.find_or_404(id).await?;
        require_owner(caller, &record)?;

        self.repository.delete(&record.id).await?;
        log::info!("{} {} deleted by {}", self.kind.name, id, caller);
        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.health_check().await
    }

    // Malformed ids and absent documents both surface as NotFound.
    async fn find_or_404(&self, id: &str) -> AppResult<Record> {
        let oid = ObjectId::parse_str(id).map_err(|_| self.not_found(id))?;

        self.repository
            .find_by_id(&oid)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: &str) -> AppError {
        AppError::NotFound(format!("{} with id '{}' not found", self.kind.name, id))
    }
}
