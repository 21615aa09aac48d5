pub mod question_repository;
pub mod quiz_repository;
pub mod role_repository;
pub mod user_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use role_repository::{MongoRoleRepository, RoleRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
