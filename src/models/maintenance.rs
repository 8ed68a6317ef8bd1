//! Modelo de MaintenanceRecord
//!
//! Registros de servicios realizados sobre la flota. `vehicle_plate`
//! es una copia puntual tomada al crear el registro y no se recalcula
//! si el vehículo cambia de matrícula.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_plate: String,
    pub service_type: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub technician: String,
    pub attachment: Option<String>,
    pub notes: Option<String>,
}

/// Request para crear o actualizar un registro de mantenimiento
///
/// Todos los campos obligatorios se validan individualmente para
/// poder reportar errores por campo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaintenanceRequest {
    pub vehicle_id: Option<Uuid>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub technician: Option<String>,
    pub attachment: Option<String>,
    pub notes: Option<String>,
}
