//!
//! Authentication of HTTP requests with JWT issued by an external identity provider.
//!
//! [JwtAuthLayer] validates `Authorization: Bearer` header and inserts
//! [User] into request extensions. Handlers check permissions
//! carried by the token with [require_all_permissions].
//!

mod dto;
pub mod error;
mod functions;
mod middleware;
pub mod test;
pub mod util;

pub use dto::User;
pub use functions::require_all_permissions;
pub use middleware::JwtAuthLayer;
