use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuizParams, QuizAnswer},
};

#[post("/admin/quiz/create")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    params: web::Query<CreateQuizParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.create_quiz(params.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/admin/quiz/all")]
pub async fn get_all_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.get_all_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[delete("/admin/quiz/delete/all")]
pub async fn delete_all_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.delete_all_quizzes().await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/admin/quiz/delete/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.delete_quiz(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/user/quiz/get/{id}")]
pub async fn get_quiz_questions(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .quiz_service
        .get_quiz_questions(id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/user/quiz/submit/{id}")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    answers: web::Json<Vec<QuizAnswer>>,
) -> Result<HttpResponse, AppError> {
    let score = state
        .quiz_service
        .calculate_result(id.into_inner(), &answers)
        .await?;
    Ok(HttpResponse::Ok().json(score))
}
