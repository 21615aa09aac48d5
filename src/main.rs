use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_server::{
    app_state::AppState, auth::AuthMiddleware, config::Config, errors::AppError, handlers,
};

fn to_io_error(err: AppError) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

async fn seed(state: &AppState) -> Result<(), AppError> {
    state.auth_service.ensure_default_roles().await?;

    if let Some((username, password)) = state.config.bootstrap_admin() {
        state.auth_service.bootstrap_admin(username, password).await?;
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production().map_err(to_io_error)?;
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).await.map_err(to_io_error)?;
    seed(&state).await.map_err(to_io_error)?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    let data = web::Data::new(state);
    HttpServer::new(move || {
        let cors = match &data.config.cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(data.clone())
            .wrap(AuthMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
