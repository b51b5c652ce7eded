use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::usuarios::handlers;
use crate::features::usuarios::services::UsuarioService;

/// Create routes for the usuarios feature
pub fn routes(service: Arc<UsuarioService>) -> Router {
    Router::new()
        .route(
            "/api/usuarios",
            get(handlers::list_usuarios).post(handlers::create_usuario),
        )
        .route("/api/usuarios/login", post(handlers::login))
        .route("/api/usuarios/{id}", get(handlers::get_usuario))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    // A lazy pool never connects unless a query runs, which lets these tests
    // exercise the paths that must reject the request before touching the
    // store.
    fn test_router() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        routes(Arc::new(UsuarioService::new(pool)))
    }

    #[tokio::test]
    async fn create_with_invalid_email_is_rejected_before_store() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/usuarios")
            .json(&json!({
                "nombre": "Ana",
                "email": "not-an-email",
                "password": "1234",
                "rol": "CLIENTE"
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_with_unknown_rol_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/usuarios")
            .json(&json!({
                "nombre": "Ana",
                "email": "ana@test.com",
                "password": "1234",
                "rol": "SUPERVISOR"
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn login_with_empty_password_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/usuarios/login")
            .json(&json!({"email": "admin@test.com", "password": ""}))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server.get("/api/usuarios/abc").await;
        response.assert_status_bad_request();
    }
}
