//! Modelo de Infraction
//!
//! Multas vinculadas a vehículo y conductor. `driver_name` es una copia
//! puntual del conductor del vehículo al momento del registro.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Infraction {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_name: String,
    pub date: NaiveDate,
    pub address: String,
    pub description: String,
    pub attachment: Option<String>,
}

/// Request para registrar una infracción
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInfractionRequest {
    pub vehicle_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub attachment: Option<String>,
}
