use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::usuarios::dtos::{CreateUsuarioDto, UsuarioResponseDto};
use crate::features::usuarios::models::Usuario;

/// Service for user operations
pub struct UsuarioService {
    pool: PgPool,
}

impl UsuarioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users, no ordering guarantee
    pub async fn list(&self) -> Result<Vec<UsuarioResponseDto>> {
        let usuarios = sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, rol FROM usuarios",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(usuarios.into_iter().map(|u| u.into()).collect())
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> Result<UsuarioResponseDto> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, rol FROM usuarios WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user by ID: {:?}", e);
            AppError::Database(e)
        })?;

        usuario
            .map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("Usuario '{}' not found", id)))
    }

    /// Look up a user by email. Internal helper, not exposed as an endpoint.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>> {
        sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, rol FROM usuarios WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by email: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Create a user, rejecting duplicate emails.
    ///
    /// The existence check is a best-effort pre-validation; the unique index
    /// on `usuarios.email` is the real enforcer, so a lost check-then-act
    /// race surfaces through the unique-violation branch below.
    pub async fn create(&self, dto: CreateUsuarioDto) -> Result<UsuarioResponseDto> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM usuarios WHERE email = $1)")
                .bind(&dto.email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check email existence: {:?}", e);
                    AppError::Database(e)
                })?;

        if exists {
            return Err(AppError::Validation(format!(
                "Ya existe un usuario con el email: {}",
                dto.email
            )));
        }

        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nombre, email, password, rol)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, email, password, rol
            "#,
        )
        .bind(&dto.nombre)
        .bind(&dto.email)
        .bind(&dto.password)
        .bind(dto.rol)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Validation(
                format!("Ya existe un usuario con el email: {}", dto.email),
            ),
            _ => {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("User created: id={}, email={}", usuario.id, usuario.email);

        Ok(usuario.into())
    }

    /// Authenticate by exact email and password match.
    ///
    /// Returns `Ok(None)` on mismatch; absence of a match is not an error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<UsuarioResponseDto>> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, rol FROM usuarios WHERE email = $1 AND password = $2",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to run login lookup: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(usuario.map(|u| u.into()))
    }
}
