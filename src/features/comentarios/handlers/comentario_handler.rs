use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::comentarios::dtos::{ComentarioResponseDto, CreateComentarioDto};
use crate::features::comentarios::services::ComentarioService;

/// List comments for a ticket, ordered by ascending creation time
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/comentarios",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ordered list of comments", body = Vec<ComentarioResponseDto>),
    ),
    tag = "comentarios"
)]
pub async fn list_comentarios(
    State(service): State<Arc<ComentarioService>>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Vec<ComentarioResponseDto>>> {
    let comentarios = service.list_by_ticket(ticket_id).await?;
    Ok(Json(comentarios))
}

/// Post a comment on a ticket
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/comentarios",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    request_body = CreateComentarioDto,
    responses(
        (status = 201, description = "Comment created", body = ComentarioResponseDto),
        (status = 400, description = "Blank text or unresolved ticket/user", body = ErrorBody)
    ),
    tag = "comentarios"
)]
pub async fn create_comentario(
    State(service): State<Arc<ComentarioService>>,
    Path(ticket_id): Path<i64>,
    AppJson(dto): AppJson<CreateComentarioDto>,
) -> Result<(StatusCode, Json<ComentarioResponseDto>)> {
    let comentario = service.create(ticket_id, dto).await?;
    Ok((StatusCode::CREATED, Json(comentario)))
}
