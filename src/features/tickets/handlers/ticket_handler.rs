use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::tickets::dtos::{CreateTicketDto, TicketResponseDto, UpdateTicketDto};
use crate::features::tickets::services::TicketService;

/// List all tickets
#[utoipa::path(
    get,
    path = "/api/tickets",
    responses(
        (status = 200, description = "List of tickets", body = Vec<TicketResponseDto>),
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
) -> Result<Json<Vec<TicketResponseDto>>> {
    let tickets = service.list().await?;
    Ok(Json(tickets))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = TicketResponseDto),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<i64>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.get_by_id(id).await?;
    Ok(Json(ticket))
}

/// Create a ticket
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponseDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<(StatusCode, Json<TicketResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Update a ticket (full replace of titulo, descripcion, prioridad, estado)
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.update(id, dto).await?;
    Ok(Json(ticket))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Ticket '{}' not found", id)))
    }
}
