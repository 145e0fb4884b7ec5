use crate::models::document::Document;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        name: String,
        doc_type: Option<String>,
        file_url: String,
        expiry_date: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Result<Document, AppError> {
        let doc = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, vehicle_id, name, doc_type, file_url, expiry_date, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(name)
        .bind(doc_type)
        .bind(file_url)
        .bind(expiry_date)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating document: {}", e)))?;

        Ok(doc)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Document>, AppError> {
        let docs = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing documents: {}", e)))?;

        Ok(docs)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting document: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        Ok(())
    }
}
