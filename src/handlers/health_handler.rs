use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.db {
        Some(db) => match db.health_check().await {
            Ok(()) => "ok",
            Err(e) => {
                log::warn!("Health check could not reach MongoDB '{}': {}", db.db_name(), e);
                "error"
            }
        },
        None => "not_configured",
    };

    let body = serde_json::json!({
        "status": if database == "error" { "degraded" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": { "mongodb": database }
    });

    if database == "error" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::mock_state;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(mock_state()))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["dependencies"]["mongodb"], "not_configured");
    }
}
