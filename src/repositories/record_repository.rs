use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::{
        domain::{Record, UserId},
        dto::request::RecordPatch,
    },
};

/// Narrows a `find_all` query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordFilter {
    pub owner: Option<UserId>,
}

impl RecordFilter {
    pub fn owned_by(owner: UserId) -> Self {
        Self { owner: Some(owner) }
    }

    pub fn to_document(&self) -> Document {
        match &self.owner {
            Some(owner) => doc! { "owner": owner.as_object_id() },
            None => doc! {},
        }
    }
}

/// Persistence for one resource kind. `update` and `delete` report
/// `NotFound` when nothing matched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn create(&self, record: Record) -> AppResult<Record>;
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Record>>;
    async fn find_all(&self, filter: RecordFilter) -> AppResult<Vec<Record>>;
    async fn update(&self, id: &ObjectId, patch: RecordPatch) -> AppResult<()>;
    async fn delete(&self, id: &ObjectId) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
    async fn health_check(&self) -> AppResult<()>;
}

pub struct MongoRecordRepository {
    db: Database,
    collection: Collection<Record>,
}

impl MongoRecordRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.get_collection(collection_name),
        }
    }

    fn update_document(patch: &RecordPatch) -> AppResult<Document> {
        let mut set = doc! { "updatedAt": to_bson(&Utc::now())? };
        if let Some(text) = &patch.text {
            set.insert("text", text.as_str());
        }
        if let Some(is_correct) = patch.is_correct {
            set.insert("isCorrect", is_correct);
        }
        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl RecordRepository for MongoRecordRepository {
    async fn create(&self, record: Record) -> AppResult<Record> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Record>> {
        let record = self.collection.find_one(doc! { "_id": *id }).await?;
        Ok(record)
    }

    async fn find_all(&self, filter: RecordFilter) -> AppResult<Vec<Record>> {
        let cursor = self.collection.find(filter.to_document()).await?;
        let records: Vec<Record> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn update(&self, id: &ObjectId, patch: RecordPatch) -> AppResult<()> {
        let update = Self::update_document(&patch)?;
        let result = self
            .collection
            .update_one(doc! { "_id": *id }, update)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Record with id '{}' not found",
                id.to_hex()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Record with id '{}' not found",
                id.to_hex()
            )));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!(
            "Creating indexes for {} collection",
            self.collection.name()
        );

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_asc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(owner_index).await?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_filter_documents() {
        assert_eq!(RecordFilter::default().to_document(), doc! {});

        let owner = UserId::new();
        let filter = RecordFilter::owned_by(owner);
        assert_eq!(
            filter.to_document(),
            doc! { "owner": owner.as_object_id() }
        );
    }

    #[test]
    fn test_update_document_sets_only_provided_fields() {
        let patch = RecordPatch {
            text: Some("Q2".to_string()),
            is_correct: None,
        };
        let update = MongoRecordRepository::update_document(&patch).unwrap();
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("text").unwrap(), "Q2");
        assert!(set.get("isCorrect").is_none());
        assert!(set.get("owner").is_none());
        assert!(matches!(set.get("updatedAt"), Some(Bson::String(_))));
    }
}
