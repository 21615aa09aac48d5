use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AdminRegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    #[validate(length(min = 1))]
    pub role: String,

    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AssignRolesRequest {
    #[validate(length(min = 1, message = "At least one role is required"))]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_right_answer", skip_on_field_errors = true))]
pub struct QuestionRequest {
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(length(min = 1, max = 1000))]
    pub question_title: String,

    #[validate(length(min = 1, max = 500))]
    pub option1: String,

    #[validate(length(min = 1, max = 500))]
    pub option2: String,

    #[validate(length(min = 1, max = 500))]
    pub option3: String,

    #[validate(length(min = 1, max = 500))]
    pub option4: String,

    #[validate(length(min = 1, max = 500))]
    pub right_answer: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub difficultylevel: String,
}

fn validate_right_answer(request: &QuestionRequest) -> Result<(), ValidationError> {
    let options = [
        &request.option1,
        &request.option2,
        &request.option3,
        &request.option4,
    ];

    if options.iter().any(|option| **option == request.right_answer) {
        Ok(())
    } else {
        Err(ValidationError::new("right_answer_not_an_option")
            .with_message("right_answer must match one of the four options".into()))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuizParams {
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[serde(rename = "numQ")]
    #[validate(range(min = 1, max = 100))]
    pub num_q: i64,

    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

/// One submitted answer. Grading is positional; `id` is accepted but unused.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizAnswer {
    #[serde(default)]
    pub id: Option<i64>,
    pub response: String,
}

impl QuizAnswer {
    pub fn new(response: &str) -> Self {
        Self {
            id: None,
            response: response.to_string(),
        }
    }
}
