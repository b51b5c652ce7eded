use chrono::Utc;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::comentarios::dtos::{ComentarioResponseDto, CreateComentarioDto};
use crate::features::comentarios::models::Comentario;

const COMENTARIO_COLUMNS: &str = "id, texto, fecha, ticket_id, usuario_id";

/// Service for comment operations
pub struct ComentarioService {
    pool: PgPool,
}

impl ComentarioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List comments for a ticket, oldest first
    pub async fn list_by_ticket(&self, ticket_id: i64) -> Result<Vec<ComentarioResponseDto>> {
        let comentarios = sqlx::query_as::<_, Comentario>(&format!(
            "SELECT {COMENTARIO_COLUMNS} FROM comentarios WHERE ticket_id = $1 ORDER BY fecha ASC"
        ))
        .bind(ticket_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list comments by ticket: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(comentarios.into_iter().map(|c| c.into()).collect())
    }

    /// Create a comment on a ticket.
    ///
    /// Validation order: blank text (after trimming), then the ticket lookup,
    /// then the user lookup. The timestamp is server-assigned and both
    /// references are bound at creation, never reassigned.
    pub async fn create(
        &self,
        ticket_id: i64,
        dto: CreateComentarioDto,
    ) -> Result<ComentarioResponseDto> {
        if dto.texto.trim().is_empty() {
            return Err(AppError::Validation(
                "El texto del comentario es obligatorio".to_string(),
            ));
        }

        let ticket_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM tickets WHERE id = $1)")
                .bind(ticket_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check ticket existence: {:?}", e);
                    AppError::Database(e)
                })?;

        if !ticket_exists {
            return Err(AppError::Validation(format!(
                "Ticket no encontrado con ID: {}",
                ticket_id
            )));
        }

        let usuario_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM usuarios WHERE id = $1)")
                .bind(dto.usuario_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check user existence: {:?}", e);
                    AppError::Database(e)
                })?;

        if !usuario_exists {
            return Err(AppError::Validation(format!(
                "Usuario no encontrado con ID: {}",
                dto.usuario_id
            )));
        }

        let comentario = sqlx::query_as::<_, Comentario>(&format!(
            r#"
            INSERT INTO comentarios (texto, fecha, ticket_id, usuario_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {COMENTARIO_COLUMNS}
            "#
        ))
        .bind(&dto.texto)
        .bind(Utc::now())
        .bind(ticket_id)
        .bind(dto.usuario_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create comment: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Comment created: id={}, ticket_id={}, usuario_id={}",
            comentario.id,
            comentario.ticket_id,
            comentario.usuario_id
        );

        Ok(comentario.into())
    }
}
