pub mod auth_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::{error::InternalError, web, ResponseError};

use crate::errors::AppError;

/// Registers every route. Literal segments go before `{id}` captures on the
/// same prefix so that e.g. `/admin/quiz/delete/all` is not parsed as an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_handler::health_check)
        .service(auth_handler::register)
        .service(auth_handler::register_with_role)
        .service(auth_handler::assign_roles)
        .service(auth_handler::login)
        .service(question_handler::get_all_questions)
        .service(question_handler::get_categories)
        .service(question_handler::get_questions_by_category)
        .service(question_handler::get_question)
        .service(question_handler::add_question)
        .service(question_handler::update_question)
        .service(question_handler::delete_question)
        .service(question_handler::user_get_all_questions)
        .service(question_handler::user_get_questions_by_category)
        .service(question_handler::user_get_question)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::get_all_quizzes)
        .service(quiz_handler::delete_all_quizzes)
        .service(quiz_handler::delete_quiz)
        .service(quiz_handler::get_quiz_questions)
        .service(quiz_handler::submit_quiz);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let error = AppError::ValidationError(err.to_string());
        let response = error.error_response();
        InternalError::from_response(err, response).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let error = AppError::ValidationError(err.to_string());
        let response = error.error_response();
        InternalError::from_response(err, response).into()
    })
}
