use serde::{Deserialize, Serialize};

use crate::models::dto::request::QuestionRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64, // Assigned by the repository on create
    pub category: String,
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub right_answer: String,
    #[serde(default)]
    pub difficultylevel: String,
}

impl Question {
    pub fn from_request(id: i64, request: QuestionRequest) -> Self {
        Question {
            id,
            category: request.category,
            question_title: request.question_title,
            option1: request.option1,
            option2: request.option2,
            option3: request.option3,
            option4: request.option4,
            right_answer: request.right_answer,
            difficultylevel: request.difficultylevel,
        }
    }

    pub fn is_correct(&self, response: &str) -> bool {
        self.right_answer == response
    }
}

#[cfg(test)]
impl Question {
    pub fn test_question(id: i64, category: &str, right_answer: &str) -> Self {
        Question {
            id,
            category: category.to_string(),
            question_title: format!("Question {}", id),
            option1: right_answer.to_string(),
            option2: "option b".to_string(),
            option3: "option c".to_string(),
            option4: "option d".to_string(),
            right_answer: right_answer.to_string(),
            difficultylevel: "Easy".to_string(),
        }
    }
}
