use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Ticket priority enum matching the database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "prioridad")]
#[serde(rename_all = "UPPERCASE")]
pub enum Prioridad {
    #[sqlx(rename = "BAJA")]
    Baja,
    #[sqlx(rename = "MEDIA")]
    Media,
    #[sqlx(rename = "ALTA")]
    Alta,
}

impl std::fmt::Display for Prioridad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prioridad::Baja => write!(f, "BAJA"),
            Prioridad::Media => write!(f, "MEDIA"),
            Prioridad::Alta => write!(f, "ALTA"),
        }
    }
}

/// Ticket state enum matching the database enum.
///
/// A two-value latch with no enforced transitions: updates may set either
/// value at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado")]
#[serde(rename_all = "UPPERCASE")]
pub enum Estado {
    #[sqlx(rename = "ABIERTO")]
    Abierto,
    #[sqlx(rename = "CERRADO")]
    Cerrado,
}

impl std::fmt::Display for Estado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Estado::Abierto => write!(f, "ABIERTO"),
            Estado::Cerrado => write!(f, "CERRADO"),
        }
    }
}

/// Database model for ticket
#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub prioridad: Prioridad,
    pub estado: Estado,
    pub fecha_creacion: DateTime<Utc>,
    pub usuario_id: Option<i64>,
    pub categoria_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_serializes_to_uppercase_tokens() {
        assert_eq!(serde_json::to_value(Estado::Abierto).unwrap(), "ABIERTO");
        assert_eq!(serde_json::to_value(Estado::Cerrado).unwrap(), "CERRADO");
    }

    #[test]
    fn prioridad_round_trips_wire_tokens() {
        for (token, prioridad) in [
            ("\"BAJA\"", Prioridad::Baja),
            ("\"MEDIA\"", Prioridad::Media),
            ("\"ALTA\"", Prioridad::Alta),
        ] {
            assert_eq!(serde_json::from_str::<Prioridad>(token).unwrap(), prioridad);
        }
    }

    #[test]
    fn prioridad_rejects_lowercase_token() {
        assert!(serde_json::from_str::<Prioridad>("\"alta\"").is_err());
    }
}
