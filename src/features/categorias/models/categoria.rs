use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
}
