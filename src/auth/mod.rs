pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;
pub mod principal;
pub mod utils;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use policy::{Access, Decision};
pub use principal::Principal;
pub use utils::{require_admin, require_any_role};
