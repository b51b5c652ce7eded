use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/api/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(handlers::get_ticket)
                .put(handlers::update_ticket)
                .delete(handlers::delete_ticket),
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
        routes(Arc::new(TicketService::new(pool)))
    }

    #[tokio::test]
    async fn create_without_titulo_is_rejected_before_store() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/tickets")
            .json(&json!({"descripcion": "No enciende", "prioridad": "ALTA"}))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_with_unknown_prioridad_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .post("/api/tickets")
            .json(&json!({
                "titulo": "Pantalla rota",
                "descripcion": "No enciende",
                "prioridad": "URGENTE"
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn update_with_blank_titulo_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .put("/api/tickets/1")
            .json(&json!({
                "titulo": "",
                "descripcion": "No enciende",
                "prioridad": "ALTA",
                "estado": "CERRADO"
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server.get("/api/tickets/abc").await;
        response.assert_status_bad_request();
    }
}
