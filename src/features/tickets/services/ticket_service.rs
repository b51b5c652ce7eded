use chrono::Utc;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateTicketDto, TicketResponseDto, UpdateTicketDto};
use crate::features::tickets::models::{Estado, Ticket};

const TICKET_COLUMNS: &str =
    "id, titulo, descripcion, prioridad, estado, fecha_creacion, usuario_id, categoria_id";

/// Service for ticket operations
pub struct TicketService {
    pool: PgPool,
}

impl TicketService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all tickets
    pub async fn list(&self) -> Result<Vec<TicketResponseDto>> {
        let tickets = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list tickets: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(tickets.into_iter().map(|t| t.into()).collect())
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: i64) -> Result<TicketResponseDto> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get ticket by ID: {:?}", e);
            AppError::Database(e)
        })?;

        ticket
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))
    }

    /// Create a ticket.
    ///
    /// The creation timestamp is the current server time and the state
    /// defaults to ABIERTO when the client leaves it unset. References are
    /// persisted as given; the FK constraints are the only reference checks.
    pub async fn create(&self, dto: CreateTicketDto) -> Result<TicketResponseDto> {
        let estado = dto.estado.unwrap_or(Estado::Abierto);
        let fecha_creacion = Utc::now();

        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            r#"
            INSERT INTO tickets (titulo, descripcion, prioridad, estado, fecha_creacion, usuario_id, categoria_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(&dto.titulo)
        .bind(&dto.descripcion)
        .bind(dto.prioridad)
        .bind(estado)
        .bind(fecha_creacion)
        .bind(dto.usuario_id)
        .bind(dto.categoria_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ticket: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Ticket created: id={}, titulo={}", ticket.id, ticket.titulo);

        Ok(ticket.into())
    }

    /// Overwrite the four mutable fields of an existing ticket.
    ///
    /// `id`, `fecha_creacion` and the user/category references are never
    /// touched. Partial update is not supported.
    pub async fn update(&self, id: i64, dto: UpdateTicketDto) -> Result<TicketResponseDto> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            r#"
            UPDATE tickets
            SET titulo = $2, descripcion = $3, prioridad = $4, estado = $5
            WHERE id = $1
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&dto.titulo)
        .bind(&dto.descripcion)
        .bind(dto.prioridad)
        .bind(dto.estado)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update ticket: {:?}", e);
            AppError::Database(e)
        })?;

        match ticket {
            Some(t) => {
                tracing::info!("Ticket updated: id={}", id);
                Ok(t.into())
            }
            None => Err(AppError::NotFound(format!("Ticket '{}' not found", id))),
        }
    }

    /// Delete a ticket by ID.
    ///
    /// Returns whether a ticket existed and was removed; absence is not an
    /// error.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                AppError::Database(e)
            })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("Ticket deleted: id={}", id);
        } else {
            tracing::warn!("Ticket '{}' not found, nothing deleted", id);
        }

        Ok(deleted)
    }
}
