use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// A quiz references its questions by id; reads resolve them against the
/// question store, so later edits to a question show up in the quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub question_ids: Vec<i64>, // Order fixed at creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(title: &str, questions: &[Question]) -> Self {
        Quiz {
            id: 0,
            title: title.to_string(),
            question_ids: questions.iter().map(|q| q.id).collect(),
            created_at: Some(Utc::now()),
        }
    }
}
