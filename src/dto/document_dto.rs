use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::document::Document;

// Request para crear un documento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    pub vehicle_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub doc_type: Option<String>,
    #[validate(length(min = 1))]
    pub file_url: String,
    /// Fecha de caducidad en formato YYYY-MM-DD, vacío = sin caducidad
    pub expiry_date: Option<String>,
    pub notes: Option<String>,
}

// Response de documento
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub name: String,
    pub doc_type: Option<String>,
    pub file_url: String,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            vehicle_id: doc.vehicle_id,
            name: doc.name,
            doc_type: doc.doc_type,
            file_url: doc.file_url,
            expiry_date: doc.expiry_date,
            notes: doc.notes,
        }
    }
}
