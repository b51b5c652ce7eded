use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::usuarios::models::Rol;

const DEFAULT_CATEGORIAS: [&str; 3] = ["Hardware", "Software", "Redes"];

const ADMIN_NOMBRE: &str = "Administrador";
const ADMIN_EMAIL: &str = "admin@test.com";
const ADMIN_PASSWORD: &str = "1234";

/// Idempotent seed of default categories and the default admin user.
///
/// Invoked once from `main` after migrations. Each insert is guarded by an
/// existence check, so repeated startups leave the data untouched.
pub async fn seed_defaults(pool: &PgPool) -> Result<()> {
    seed_categorias(pool).await?;
    seed_admin(pool).await?;
    Ok(())
}

async fn seed_categorias(pool: &PgPool) -> Result<()> {
    for nombre in DEFAULT_CATEGORIAS {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categorias WHERE nombre = $1)")
                .bind(nombre)
                .fetch_one(pool)
                .await
                .map_err(AppError::Database)?;

        if exists {
            tracing::info!("Seed category already present: {}", nombre);
            continue;
        }

        sqlx::query("INSERT INTO categorias (nombre) VALUES ($1)")
            .bind(nombre)
            .execute(pool)
            .await
            .map_err(AppError::Database)?;
        tracing::info!("Seed category created: {}", nombre);
    }

    Ok(())
}

async fn seed_admin(pool: &PgPool) -> Result<()> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM usuarios WHERE email = $1)")
            .bind(ADMIN_EMAIL)
            .fetch_one(pool)
            .await
            .map_err(AppError::Database)?;

    if exists {
        tracing::info!("Seed admin user already present: {}", ADMIN_EMAIL);
        return Ok(());
    }

    sqlx::query("INSERT INTO usuarios (nombre, email, password, rol) VALUES ($1, $2, $3, $4)")
        .bind(ADMIN_NOMBRE)
        .bind(ADMIN_EMAIL)
        .bind(ADMIN_PASSWORD)
        .bind(Rol::Tecnico)
        .execute(pool)
        .await
        .map_err(AppError::Database)?;
    tracing::info!("Seed admin user created: {}", ADMIN_EMAIL);

    Ok(())
}
