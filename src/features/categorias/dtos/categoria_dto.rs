use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categorias::models::Categoria;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoriaDto {
    #[validate(length(min = 1, max = 100, message = "El nombre es obligatorio"))]
    pub nombre: String,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaResponseDto {
    pub id: i64,
    pub nombre: String,
}

impl From<Categoria> for CategoriaResponseDto {
    fn from(c: Categoria) -> Self {
        Self {
            id: c.id,
            nombre: c.nombre,
        }
    }
}
