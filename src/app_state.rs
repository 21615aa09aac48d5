use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuestionRepository, MongoQuizRepository, MongoRoleRepository, MongoUserRepository,
        QuestionRepository, QuizRepository, RoleRepository, UserRepository,
    },
    services::{AuthService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Option<Arc<Database>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let users = Arc::new(MongoUserRepository::new(&db));
        users.ensure_indexes().await?;

        let roles = Arc::new(MongoRoleRepository::new(&db));
        roles.ensure_indexes().await?;

        let questions = Arc::new(MongoQuestionRepository::new(&db));
        questions.ensure_indexes().await?;

        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;

        let mut state = Self::from_repositories(config, users, roles, questions, quizzes)?;
        state.db = Some(Arc::new(db));
        Ok(state)
    }

    /// Wires services over arbitrary repository implementations.
    pub fn from_repositories(
        config: Config,
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        questions: Arc<dyn QuestionRepository>,
        quizzes: Arc<dyn QuizRepository>,
    ) -> AppResult<Self> {
        let jwt_service = Arc::new(JwtService::from_millis(
            &config.jwt_secret,
            config.jwt_expiration_ms,
        )?);

        let auth_service = Arc::new(AuthService::new(
            users,
            roles,
            jwt_service.clone(),
            config.bcrypt_cost,
        ));
        let question_service = Arc::new(QuestionService::new(questions.clone()));
        let quiz_service = Arc::new(QuizService::new(quizzes, questions));

        Ok(Self {
            auth_service,
            question_service,
            quiz_service,
            jwt_service,
            db: None,
            config: Arc::new(config),
        })
    }
}
