pub mod record;
pub mod resource;
pub mod user_id;
pub use record::Record;
pub use resource::{ListScope, ResourceKind};
pub use user_id::UserId;
