pub mod record_repository;

pub use record_repository::{MongoRecordRepository, RecordFilter, RecordRepository};

#[cfg(test)]
pub use record_repository::MockRecordRepository;
