use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User role enum matching the database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "rol")]
#[serde(rename_all = "UPPERCASE")]
pub enum Rol {
    /// Raises tickets
    #[sqlx(rename = "CLIENTE")]
    Cliente,
    /// Resolves tickets
    #[sqlx(rename = "TECNICO")]
    Tecnico,
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rol::Cliente => write!(f, "CLIENTE"),
            Rol::Tecnico => write!(f, "TECNICO"),
        }
    }
}

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: Rol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rol_serializes_to_uppercase_tokens() {
        assert_eq!(serde_json::to_value(Rol::Cliente).unwrap(), "CLIENTE");
        assert_eq!(serde_json::to_value(Rol::Tecnico).unwrap(), "TECNICO");
    }

    #[test]
    fn rol_rejects_unknown_token() {
        assert!(serde_json::from_str::<Rol>("\"ADMIN\"").is_err());
    }
}
