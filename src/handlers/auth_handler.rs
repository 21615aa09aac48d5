use actix_web::{post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{AdminRegisterRequest, AssignRolesRequest, LoginRequest, RegisterRequest},
};

#[post("/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/auth/admin/register")]
pub async fn register_with_role(
    state: web::Data<AppState>,
    request: web::Json<AdminRegisterRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state
        .auth_service
        .register_with_role(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/auth/admin/users/{username}/roles")]
pub async fn assign_roles(
    state: web::Data<AppState>,
    username: web::Path<String>,
    request: web::Json<AssignRolesRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let user = state
        .auth_service
        .assign_roles(&username, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
