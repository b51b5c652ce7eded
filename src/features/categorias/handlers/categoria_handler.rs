use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::categorias::dtos::{CategoriaResponseDto, CreateCategoriaDto};
use crate::features::categorias::services::CategoriaService;

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categorias",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoriaResponseDto>),
    ),
    tag = "categorias"
)]
pub async fn list_categorias(
    State(service): State<Arc<CategoriaService>>,
) -> Result<Json<Vec<CategoriaResponseDto>>> {
    let categorias = service.list().await?;
    Ok(Json(categorias))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/categorias/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoriaResponseDto),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn get_categoria(
    State(service): State<Arc<CategoriaService>>,
    Path(id): Path<i64>,
) -> Result<Json<CategoriaResponseDto>> {
    let categoria = service.get_by_id(id).await?;
    Ok(Json(categoria))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categorias",
    request_body = CreateCategoriaDto,
    responses(
        (status = 201, description = "Category created", body = CategoriaResponseDto),
        (status = 400, description = "Validation error or duplicate name", body = ErrorBody)
    ),
    tag = "categorias"
)]
pub async fn create_categoria(
    State(service): State<Arc<CategoriaService>>,
    AppJson(dto): AppJson<CreateCategoriaDto>,
) -> Result<(StatusCode, Json<CategoriaResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let categoria = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(categoria)))
}
