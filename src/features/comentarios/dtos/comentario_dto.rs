use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::comentarios::models::Comentario;

/// Request DTO for posting a comment on a ticket.
///
/// The blank-text check happens in the service after trimming, so there is
/// no length rule here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComentarioDto {
    pub texto: String,
    pub usuario_id: i64,
}

/// Response DTO for comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComentarioResponseDto {
    pub id: i64,
    pub texto: String,
    pub fecha: DateTime<Utc>,
    pub ticket_id: i64,
    pub usuario_id: i64,
}

impl From<Comentario> for ComentarioResponseDto {
    fn from(c: Comentario) -> Self {
        Self {
            id: c.id,
            texto: c.texto,
            fecha: c.fecha,
            ticket_id: c.ticket_id,
            usuario_id: c.usuario_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_original_wire_field_names() {
        let comentario = Comentario {
            id: 1,
            texto: "Revisado".to_string(),
            fecha: Utc::now(),
            ticket_id: 3,
            usuario_id: 7,
        };
        let value = serde_json::to_value(ComentarioResponseDto::from(comentario)).unwrap();
        assert_eq!(value["ticketId"], 3);
        assert_eq!(value["usuarioId"], 7);
        assert!(value.get("fecha").is_some());
    }
}
