use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comment
#[derive(Debug, Clone, FromRow)]
pub struct Comentario {
    pub id: i64,
    pub texto: String,
    pub fecha: DateTime<Utc>,
    pub ticket_id: i64,
    pub usuario_id: i64,
}
