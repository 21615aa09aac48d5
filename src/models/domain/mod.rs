pub mod question;
pub mod quiz;
pub mod role;
pub mod user;
pub use question::Question;
pub use quiz::Quiz;
pub use role::{Role, RoleRecord};
pub use user::User;
