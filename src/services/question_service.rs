use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Question, dto::request::QuestionRequest},
    repositories::QuestionRepository,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

fn question_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Question with id {} not found", id))
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_questions(&self) -> AppResult<Vec<Question>> {
        self.repository.find_all().await
    }

    pub async fn get_questions_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        self.repository.find_by_category(category).await
    }

    pub async fn get_question(&self, id: i64) -> AppResult<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| question_not_found(id))
    }

    pub async fn get_all_categories(&self) -> AppResult<Vec<String>> {
        self.repository.find_distinct_categories().await
    }

    pub async fn add_question(&self, request: QuestionRequest) -> AppResult<Question> {
        request.validate()?;

        let question = self
            .repository
            .create(Question::from_request(0, request))
            .await?;

        log::info!(
            "Added question {} to category '{}'",
            question.id,
            question.category
        );
        Ok(question)
    }

    pub async fn update_question(&self, id: i64, request: QuestionRequest) -> AppResult<Question> {
        request.validate()?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(question_not_found(id));
        }

        let updated = self
            .repository
            .update(Question::from_request(id, request))
            .await?;

        log::info!("Updated question {}", id);
        Ok(updated)
    }

    pub async fn delete_question(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(question_not_found(id));
        }

        log::info!("Deleted question {}", id);
        Ok(())
    }
}
