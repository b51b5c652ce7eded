use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::usuarios::dtos::{CreateUsuarioDto, LoginRequestDto, UsuarioResponseDto};
use crate::features::usuarios::services::UsuarioService;

/// List all users
#[utoipa::path(
    get,
    path = "/api/usuarios",
    responses(
        (status = 200, description = "List of users", body = Vec<UsuarioResponseDto>),
    ),
    tag = "usuarios"
)]
pub async fn list_usuarios(
    State(service): State<Arc<UsuarioService>>,
) -> Result<Json<Vec<UsuarioResponseDto>>> {
    let usuarios = service.list().await?;
    Ok(Json(usuarios))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UsuarioResponseDto),
        (status = 404, description = "User not found")
    ),
    tag = "usuarios"
)]
pub async fn get_usuario(
    State(service): State<Arc<UsuarioService>>,
    Path(id): Path<i64>,
) -> Result<Json<UsuarioResponseDto>> {
    let usuario = service.get_by_id(id).await?;
    Ok(Json(usuario))
}

/// Create a user (signup)
#[utoipa::path(
    post,
    path = "/api/usuarios",
    request_body = CreateUsuarioDto,
    responses(
        (status = 201, description = "User created", body = UsuarioResponseDto),
        (status = 400, description = "Validation error or duplicate email", body = ErrorBody)
    ),
    tag = "usuarios"
)]
pub async fn create_usuario(
    State(service): State<Arc<UsuarioService>>,
    AppJson(dto): AppJson<CreateUsuarioDto>,
) -> Result<(StatusCode, Json<UsuarioResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let usuario = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/api/usuarios/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = UsuarioResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "usuarios"
)]
pub async fn login(
    State(service): State<Arc<UsuarioService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<UsuarioResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!("Login attempt for: {}", dto.email);

    match service.login(&dto.email, &dto.password).await? {
        Some(usuario) => Ok(Json(usuario)),
        None => {
            tracing::warn!("Login failed for: {}", dto.email);
            Err(AppError::Unauthorized("Credenciales inválidas".to_string()))
        }
    }
}
