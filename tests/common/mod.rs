#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quiz_server::{
    app_state::AppState,
    auth::Principal,
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, Role, RoleRecord, User},
        dto::request::RegisterRequest,
    },
    repositories::{QuestionRepository, QuizRepository, RoleRepository, UserRepository},
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pass";

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                user.username
            )));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.username) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(AppError::NotFound(format!(
                "User '{}' not found",
                user.username
            ))),
        }
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

impl InMemoryUserRepository {
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[derive(Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<Role, RoleRecord>>,
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_name(&self, name: Role) -> AppResult<Option<RoleRecord>> {
        Ok(self.roles.read().await.get(&name).cloned())
    }

    async fn save(&self, role: RoleRecord) -> AppResult<RoleRecord> {
        self.roles.write().await.entry(role.name).or_insert_with(|| role.clone());
        Ok(role)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

impl InMemoryRoleRepository {
    pub async fn count(&self) -> usize {
        self.roles.read().await.len()
    }
}

pub struct InMemoryQuestionRepository {
    questions: RwLock<HashMap<i64, Question>>,
    next_id: AtomicI64,
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self {
            questions: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryQuestionRepository {
    async fn sorted(&self) -> Vec<Question> {
        let mut items: Vec<_> = self.questions.read().await.values().cloned().collect();
        items.sort_by_key(|q| q.id);
        items
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, mut question: Question) -> AppResult<Question> {
        question.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.questions
            .write()
            .await
            .insert(question.id, question.clone());
        Ok(question)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.sorted().await)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.questions.read().await.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(ids.iter().filter_map(|id| questions.get(id).cloned()).collect())
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        Ok(self
            .sorted()
            .await
            .into_iter()
            .filter(|q| q.category == category)
            .collect())
    }

    // Deterministic stand-in for `$sample`: newest first.
    async fn find_random_by_category(&self, category: &str, count: i64) -> AppResult<Vec<Question>> {
        Ok(self
            .find_by_category(category)
            .await?
            .into_iter()
            .rev()
            .take(count.max(0) as usize)
            .collect())
    }

    async fn find_distinct_categories(&self) -> AppResult<Vec<String>> {
        let mut categories: Vec<String> =
            self.sorted().await.into_iter().map(|q| q.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        match questions.get_mut(&question.id) {
            Some(existing) => {
                *existing = question.clone();
                Ok(question)
            }
            None => Err(AppError::NotFound(format!(
                "Question with id {} not found",
                question.id
            ))),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.questions.write().await.remove(&id).is_some())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<i64, Quiz>>,
    next_id: AtomicI64,
}

impl Default for InMemoryQuizRepository {
    fn default() -> Self {
        Self {
            quizzes: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryQuizRepository {
    pub async fn count(&self) -> usize {
        self.quizzes.read().await.len()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.quizzes.write().await.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let mut items: Vec<_> = self.quizzes.read().await.values().cloned().collect();
        items.sort_by_key(|q| q.id);
        Ok(items)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.quizzes.write().await.remove(&id).is_some())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut quizzes = self.quizzes.write().await;
        let removed = quizzes.len() as u64;
        quizzes.clear();
        Ok(removed)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Application state over in-memory stores, with handles kept for assertions.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub roles: Arc<InMemoryRoleRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub quizzes: Arc<InMemoryQuizRepository>,
}

impl TestContext {
    /// Seeds the default roles and an admin account.
    pub async fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let roles = Arc::new(InMemoryRoleRepository::default());
        let questions = Arc::new(InMemoryQuestionRepository::default());
        let quizzes = Arc::new(InMemoryQuizRepository::default());

        let state = AppState::from_repositories(
            Config::for_tests(),
            users.clone(),
            roles.clone(),
            questions.clone(),
            quizzes.clone(),
        )
        .expect("test config should be valid");

        state
            .auth_service
            .ensure_default_roles()
            .await
            .expect("roles should seed");
        state
            .auth_service
            .bootstrap_admin(ADMIN_USERNAME, &SecretString::from(ADMIN_PASSWORD.to_string()))
            .await
            .expect("admin should seed");

        Self {
            state,
            users,
            roles,
            questions,
            quizzes,
        }
    }

    /// Issues a token for a stored user without going through the login endpoint.
    pub async fn token_for(&self, username: &str) -> String {
        let user = self
            .state
            .auth_service
            .load_user(username)
            .await
            .expect("user should exist");
        self.state
            .jwt_service
            .issue(&Principal::from(&user))
            .expect("token should be issued")
    }

    pub async fn register_user(&self, username: &str, password: &str) {
        self.state
            .auth_service
            .register(RegisterRequest {
                username: username.to_string(),
                password: password.to_string(),
                email: None,
            })
            .await
            .expect("user should register");
    }

    pub async fn add_question(&self, category: &str, title: &str, options: [&str; 4], answer: &str) -> Question {
        self.questions
            .create(Question {
                id: 0,
                category: category.to_string(),
                question_title: title.to_string(),
                option1: options[0].to_string(),
                option2: options[1].to_string(),
                option3: options[2].to_string(),
                option4: options[3].to_string(),
                right_answer: answer.to_string(),
                difficultylevel: "Easy".to_string(),
            })
            .await
            .expect("question should be stored")
    }
}
