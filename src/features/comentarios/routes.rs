use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::comentarios::handlers;
use crate::features::comentarios::services::ComentarioService;

/// Create routes for the comentarios feature.
///
/// Comments hang off the tickets path; the `{id}` segment name matches the
/// tickets router so the merged route trees agree on the parameter.
pub fn routes(service: Arc<ComentarioService>) -> Router {
    Router::new()
        .route(
            "/api/tickets/{id}/comentarios",
            get(handlers::list_comentarios).post(handlers::create_comentario),
        )
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
        routes(Arc::new(ComentarioService::new(pool)))
    }

    // The blank-text check runs before any lookup, so no store is needed.
    #[tokio::test]
    async fn blank_texto_is_rejected_before_store() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/tickets/1/comentarios")
            .json(&json!({"texto": "   ", "usuarioId": 1}))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn missing_usuario_id_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/tickets/1/comentarios")
            .json(&json!({"texto": "Revisado"}))
            .await;
        response.assert_status_bad_request();
    }
}
