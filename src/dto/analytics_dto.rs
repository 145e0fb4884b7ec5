use rust_decimal::Decimal;
use serde::Serialize;

// Response de estadísticas de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleStatsResponse {
    pub total_fuel_cost: Decimal,
    pub total_service_cost: Decimal,
    pub total_liters: Decimal,
    pub total_services: i64,
    pub total_fuel_logs: i64,
    pub total_cost: Decimal,
}
