use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Question, Quiz, Role, User};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: BTreeSet<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            username: user.username,
            email: user.email,
            roles: user.roles,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Question as shown to quiz takers: no answer field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionWrapper {
    pub id: i64,
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}

impl From<Question> for QuestionWrapper {
    fn from(question: Question) -> Self {
        QuestionWrapper {
            id: question.id,
            question_title: question.question_title,
            option1: question.option1,
            option2: question.option2,
            option3: question.option3,
            option4: question.option4,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub id: i64,
    pub title: String,
    pub questions: Vec<Question>,
}

impl QuizDto {
    pub fn new(quiz: Quiz, questions: Vec<Question>) -> Self {
        QuizDto {
            id: quiz.id,
            title: quiz.title,
            questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizCreatedResponse {
    pub id: i64,
    pub question_count: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResponse {
    pub deleted: u64,
    pub message: String,
}
