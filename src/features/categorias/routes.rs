use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categorias::handlers;
use crate::features::categorias::services::CategoriaService;

/// Create routes for the categorias feature
pub fn routes(service: Arc<CategoriaService>) -> Router {
    Router::new()
        .route(
            "/api/categorias",
            get(handlers::list_categorias).post(handlers::create_categoria),
        )
        .route("/api/categorias/{id}", get(handlers::get_categoria))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    fn test_router() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        routes(Arc::new(CategoriaService::new(pool)))
    }

    #[tokio::test]
    async fn create_with_empty_nombre_is_rejected_before_store() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/categorias")
            .json(&json!({"nombre": ""}))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_with_missing_nombre_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server.post("/api/categorias").json(&json!({})).await;
        response.assert_status_bad_request();
    }
}
