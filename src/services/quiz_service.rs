use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz},
        dto::{
            request::{CreateQuizParams, QuizAnswer},
            response::{DeleteAllResponse, MessageResponse, QuestionWrapper, QuizCreatedResponse, QuizDto},
        },
    },
    repositories::{QuestionRepository, QuizRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

fn quiz_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Quiz with id {} not found", id))
}

/// Scores responses against questions by position. Only as many positions as
/// the shorter list are compared.
pub fn grade(questions: &[Question], answers: &[QuizAnswer]) -> u32 {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(&answer.response))
        .count() as u32
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { quizzes, questions }
    }

    pub async fn create_quiz(&self, params: CreateQuizParams) -> AppResult<QuizCreatedResponse> {
        params.validate()?;

        let selected = self
            .questions
            .find_random_by_category(&params.category, params.num_q)
            .await?;

        if selected.is_empty() {
            return Err(AppError::BadRequest(format!(
                "No questions found for category: {}",
                params.category
            )));
        }

        let quiz = self.quizzes.create(Quiz::new(&params.title, &selected)).await?;

        log::info!(
            "Created quiz {} '{}' with {} questions from '{}'",
            quiz.id,
            quiz.title,
            quiz.question_ids.len(),
            params.category
        );

        Ok(QuizCreatedResponse {
            id: quiz.id,
            question_count: quiz.question_ids.len(),
            message: "Quiz created successfully".to_string(),
        })
    }

    pub async fn get_quiz_questions(&self, id: i64) -> AppResult<Vec<QuestionWrapper>> {
        let (_, questions) = self.load_quiz(id).await?;
        Ok(questions.into_iter().map(QuestionWrapper::from).collect())
    }

    pub async fn calculate_result(&self, id: i64, answers: &[QuizAnswer]) -> AppResult<u32> {
        let (quiz, questions) = self.load_quiz(id).await?;
        let score = grade(&questions, answers);

        log::debug!(
            "Quiz {} scored {}/{} ({} responses)",
            quiz.id,
            score,
            questions.len(),
            answers.len()
        );
        Ok(score)
    }

    pub async fn delete_quiz(&self, id: i64) -> AppResult<MessageResponse> {
        if !self.quizzes.delete(id).await? {
            return Err(quiz_not_found(id));
        }

        log::info!("Deleted quiz {}", id);
        Ok(MessageResponse::new(format!(
            "Quiz with id {} deleted successfully",
            id
        )))
    }

    pub async fn delete_all_quizzes(&self) -> AppResult<DeleteAllResponse> {
        let deleted = self.quizzes.delete_all().await?;

        let message = if deleted == 0 {
            "No quizzes found to delete".to_string()
        } else {
            log::info!("Deleted {} quizzes", deleted);
            format!("All {} quizzes deleted successfully", deleted)
        };

        Ok(DeleteAllResponse { deleted, message })
    }

    pub async fn get_all_quizzes(&self) -> AppResult<Vec<QuizDto>> {
        let quizzes = self.quizzes.find_all().await?;

        let mut result = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            let questions = self.questions.find_by_ids(&quiz.question_ids).await?;
            result.push(QuizDto::new(quiz, questions));
        }
        Ok(result)
    }

    // Questions deleted after quiz creation are skipped.
    async fn load_quiz(&self, id: i64) -> AppResult<(Quiz, Vec<Question>)> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| quiz_not_found(id))?;

        let questions = self.questions.find_by_ids(&quiz.question_ids).await?;
        Ok((quiz, questions))
    }
}
