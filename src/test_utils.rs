use crate::models::{domain::Question, dto::request::QuestionRequest};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A valid request for a math question whose answer is "4"
    pub fn question_request() -> QuestionRequest {
        QuestionRequest {
            category: "math".to_string(),
            question_title: "2 + 2?".to_string(),
            option1: "3".to_string(),
            option2: "4".to_string(),
            option3: "5".to_string(),
            option4: "22".to_string(),
            right_answer: "4".to_string(),
            difficultylevel: "Easy".to_string(),
        }
    }

    /// Questions across two categories, ids 1..=4
    pub fn test_questions() -> Vec<Question> {
        vec![
            Question::test_question(1, "math", "4"),
            Question::test_question(2, "math", "9"),
            Question::test_question(3, "geography", "Paris"),
            Question::test_question(4, "geography", "London"),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState,
        config::Config,
        repositories::{
            question_repository::MockQuestionRepository, quiz_repository::MockQuizRepository,
            role_repository::MockRoleRepository, user_repository::MockUserRepository,
        },
    };

    /// App state over mocks with no expectations set
    pub fn mock_state() -> AppState {
        mock_state_with(MockQuestionRepository::new(), MockQuizRepository::new())
    }

    pub fn mock_state_with(questions: MockQuestionRepository, quizzes: MockQuizRepository) -> AppState {
        AppState::from_repositories(
            Config::test_config(),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockRoleRepository::new()),
            Arc::new(questions),
            Arc::new(quizzes),
        )
        .unwrap()
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_question_request_is_valid() {
        assert!(question_request().validate().is_ok());
    }

    #[test]
    fn test_fixtures_test_questions() {
        let questions = test_questions();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].category, "math");
        assert_eq!(questions[2].right_answer, "Paris");
    }
}
