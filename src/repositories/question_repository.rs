use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    options::{FindOptions, IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Question,
};

const QUESTION_SEQUENCE: &str = "question_id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Stores the question under a freshly assigned id, ignoring the id it carries.
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    /// Returns the questions in the order of `ids`, skipping ids that no longer exist.
    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Question>>;
    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Question>>;
    /// Up to `count` questions of `category`, chosen at random.
    async fn find_random_by_category(&self, category: &str, count: i64) -> AppResult<Vec<Question>>;
    async fn find_distinct_categories(&self) -> AppResult<Vec<String>>;
    async fn update(&self, question: Question) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<bool>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    db: Database,
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self {
            db: db.clone(),
            collection,
        }
    }

    fn by_id() -> FindOptions {
        FindOptions::builder().sort(doc! { "id": 1 }).build()
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn create(&self, mut question: Question) -> AppResult<Question> {
        question.id = self.db.next_sequence(QUESTION_SEQUENCE).await?;
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! {})
            .with_options(Self::by_id())
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Question>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?;
        let found: Vec<Question> = cursor.try_collect().await?;

        let mut by_id: HashMap<i64, Question> = found.into_iter().map(|q| (q.id, q)).collect();
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! { "category": category })
            .with_options(Self::by_id())
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_random_by_category(&self, category: &str, count: i64) -> AppResult<Vec<Question>> {
        let pipeline = vec![
            doc! { "$match": { "category": category } },
            doc! { "$sample": { "size": count } },
        ];

        let cursor = self.collection.aggregate(pipeline).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(|document| from_document::<Question>(document).map_err(AppError::from))
            .collect()
    }

    async fn find_distinct_categories(&self) -> AppResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;

        let mut categories: Vec<String> = values
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
        categories.sort();
        Ok(categories)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let options = ReplaceOptions::builder().upsert(false).build();

        let result = self
            .collection
            .replace_one(doc! { "id": question.id }, &question)
            .with_options(options)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                question.id
            )));
        }

        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(IndexOptions::builder().name("category".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![id_index, category_index])
            .await?;

        log::info!("Created indexes for questions collection");
        Ok(())
    }
}
