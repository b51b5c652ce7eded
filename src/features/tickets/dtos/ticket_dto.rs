use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::tickets::models::{Estado, Prioridad, Ticket};

/// Request DTO for creating a ticket.
///
/// `estado` is optional and defaults to ABIERTO; the creation timestamp is
/// always server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketDto {
    #[validate(length(min = 1, max = 200, message = "El título no puede estar vacío"))]
    pub titulo: String,

    #[validate(length(min = 1, message = "La descripción no puede estar vacía"))]
    pub descripcion: String,

    pub prioridad: Prioridad,

    #[serde(default)]
    pub estado: Option<Estado>,

    #[serde(default)]
    pub usuario_id: Option<i64>,

    #[serde(default)]
    pub categoria_id: Option<i64>,
}

/// Request DTO for the full-field ticket update.
///
/// Exactly these four fields are overwritten; id, creation timestamp and the
/// user/category references are preserved unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketDto {
    #[validate(length(min = 1, max = 200, message = "El título no puede estar vacío"))]
    pub titulo: String,

    #[validate(length(min = 1, message = "La descripción no puede estar vacía"))]
    pub descripcion: String,

    pub prioridad: Prioridad,

    pub estado: Estado,
}

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseDto {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub prioridad: Prioridad,
    pub estado: Estado,
    pub fecha_creacion: DateTime<Utc>,
    pub usuario_id: Option<i64>,
    pub categoria_id: Option<i64>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            titulo: t.titulo,
            descripcion: t.descripcion,
            prioridad: t.prioridad,
            estado: t.estado,
            fecha_creacion: t.fecha_creacion,
            usuario_id: t.usuario_id,
            categoria_id: t.categoria_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_original_wire_field_names() {
        let ticket = Ticket {
            id: 1,
            titulo: "Pantalla rota".to_string(),
            descripcion: "No enciende".to_string(),
            prioridad: Prioridad::Alta,
            estado: Estado::Abierto,
            fecha_creacion: Utc::now(),
            usuario_id: Some(2),
            categoria_id: None,
        };
        let value = serde_json::to_value(TicketResponseDto::from(ticket)).unwrap();
        assert!(value.get("fechaCreacion").is_some());
        assert_eq!(value["usuarioId"], 2);
        assert!(value["categoriaId"].is_null());
        assert_eq!(value["estado"], "ABIERTO");
    }

    #[test]
    fn create_dto_estado_defaults_to_none_when_absent() {
        let dto: CreateTicketDto = serde_json::from_value(serde_json::json!({
            "titulo": "Impresora",
            "descripcion": "Atasco de papel",
            "prioridad": "MEDIA"
        }))
        .unwrap();
        assert!(dto.estado.is_none());
        assert!(dto.usuario_id.is_none());
    }

    #[test]
    fn create_dto_missing_prioridad_fails_to_deserialize() {
        let result = serde_json::from_value::<CreateTicketDto>(serde_json::json!({
            "titulo": "Impresora",
            "descripcion": "Atasco de papel"
        }));
        assert!(result.is_err());
    }
}
