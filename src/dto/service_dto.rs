use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service_record::ServiceRecord;

// Request para crear o actualizar un registro de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRecordRequest {
    pub vehicle_id: Uuid,
    /// Fecha en formato YYYY-MM-DD
    pub date: String,
    #[validate(range(min = 0))]
    pub odometer: i32,
    pub cost: f64,
    pub notes: Option<String>,
    pub service_type: Option<String>,
    pub document_url: Option<String>,
}

// Response de registro de mantenimiento
#[derive(Debug, Serialize)]
pub struct ServiceRecordResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub odometer: i32,
    pub cost: Decimal,
    pub notes: Option<String>,
    pub service_type: Option<String>,
    pub document_url: Option<String>,
}

impl From<ServiceRecord> for ServiceRecordResponse {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            date: record.date,
            odometer: record.odometer,
            cost: record.cost,
            notes: record.notes,
            service_type: record.service_type,
            document_url: record.document_url,
        }
    }
}
