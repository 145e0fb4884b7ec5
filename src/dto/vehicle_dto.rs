use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para crear o reemplazar un vehículo (PUT reutiliza el mismo body)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    pub vehicle_type: Option<String>,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub image_url: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vehicle_type: Option<String>,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            vehicle_type: vehicle.vehicle_type,
            vin: vehicle.vin,
            license_plate: vehicle.license_plate,
            image_url: vehicle.image_url,
            created_at: vehicle.created_at,
        }
    }
}
