pub mod claims;
pub mod identity;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::Claims;
pub use identity::IdentityProvider;
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use utils::require_owner;
