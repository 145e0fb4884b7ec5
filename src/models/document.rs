//! Modelo de Document
//!
//! Documentos asociados a un vehículo (seguro, ITV, factura, etc.).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Document - mapea a la tabla documents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub name: String,
    pub doc_type: Option<String>,
    pub file_url: String,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
