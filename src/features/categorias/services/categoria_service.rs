use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categorias::dtos::{CategoriaResponseDto, CreateCategoriaDto};
use crate::features::categorias::models::Categoria;

/// Service for category operations
pub struct CategoriaService {
    pool: PgPool,
}

impl CategoriaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<CategoriaResponseDto>> {
        let categorias =
            sqlx::query_as::<_, Categoria>("SELECT id, nombre FROM categorias")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list categories: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(categorias.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: i64) -> Result<CategoriaResponseDto> {
        let categoria =
            sqlx::query_as::<_, Categoria>("SELECT id, nombre FROM categorias WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get category by ID: {:?}", e);
                    AppError::Database(e)
                })?;

        categoria
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Categoria '{}' not found", id)))
    }

    /// Create a category, rejecting case-sensitive duplicate names.
    ///
    /// Pre-check plus unique-index fallback, same scheme as user creation.
    pub async fn create(&self, dto: CreateCategoriaDto) -> Result<CategoriaResponseDto> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categorias WHERE nombre = $1)")
                .bind(&dto.nombre)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check category name existence: {:?}", e);
                    AppError::Database(e)
                })?;

        if exists {
            return Err(AppError::Validation(format!(
                "Ya existe una categoría con el nombre: {}",
                dto.nombre
            )));
        }

        let categoria = sqlx::query_as::<_, Categoria>(
            "INSERT INTO categorias (nombre) VALUES ($1) RETURNING id, nombre",
        )
        .bind(&dto.nombre)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Validation(
                format!("Ya existe una categoría con el nombre: {}", dto.nombre),
            ),
            _ => {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "Category created: id={}, nombre={}",
            categoria.id,
            categoria.nombre
        );

        Ok(categoria.into())
    }
}
