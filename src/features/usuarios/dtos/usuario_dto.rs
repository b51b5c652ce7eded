use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::usuarios::models::{Rol, Usuario};

/// Request DTO for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsuarioDto {
    #[validate(length(min = 1, max = 100, message = "El nombre es obligatorio"))]
    pub nombre: String,

    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "La contraseña es obligatoria"))]
    pub password: String,

    pub rol: Rol,
}

/// Request DTO for login credentials
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,
}

/// Response DTO for user. The stored password is never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioResponseDto {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
}

impl From<Usuario> for UsuarioResponseDto {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            email: u.email,
            rol: u.rol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_rejects_bad_email() {
        let dto = CreateUsuarioDto {
            nombre: "Ana".to_string(),
            email: "not-an-email".to_string(),
            password: "1234".to_string(),
            rol: Rol::Cliente,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_empty_password() {
        let dto = CreateUsuarioDto {
            nombre: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            password: String::new(),
            rol: Rol::Cliente,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn response_omits_password() {
        let usuario = Usuario {
            id: 1,
            nombre: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            password: "1234".to_string(),
            rol: Rol::Tecnico,
        };
        let value = serde_json::to_value(UsuarioResponseDto::from(usuario)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["rol"], "TECNICO");
    }
}
