use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::QuestionRequest, response::MessageResponse},
};

#[get("/admin/question/allQuestions")]
pub async fn get_all_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.get_all_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/admin/question/categories")]
pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.question_service.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/admin/question/category/{category}")]
pub async fn get_questions_by_category(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .question_service
        .get_questions_by_category(&category)
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/admin/question/id/{id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/admin/question/addQuestions")]
pub async fn add_question(
    state: web::Data<AppState>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .add_question(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[put("/admin/question/update/{id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .update_question(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/admin/question/delete/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.question_service.delete_question(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Question with id {} deleted successfully",
        id
    ))))
}

// Read-only mirror for quiz takers

#[get("/user/question/allQuestions")]
pub async fn user_get_all_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.get_all_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/user/question/category/{category}")]
pub async fn user_get_questions_by_category(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .question_service
        .get_questions_by_category(&category)
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/user/question/id/{id}")]
pub async fn user_get_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(question))
}
