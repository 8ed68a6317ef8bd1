//! Modelo de Driver
//!
//! Mismo formato full-CRUD que Vehicle: datos de habilitación,
//! contacto y vehículo asignado.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    Available,
    InService,
    OutOfService,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::InService => "in-service",
            DriverStatus::OutOfService => "out-of-service",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub license_number: String,
    pub license_category: String,
    pub license_expiry: NaiveDate,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// Matrícula del vehículo asignado (copia puntual, no join)
    pub assigned_vehicle: Option<String>,
    pub status: DriverStatus,
    pub image_url: Option<String>,
}

/// Request para crear un nuevo conductor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDriverRequest {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub license_number: Option<String>,
    pub license_category: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub assigned_vehicle: Option<String>,
    pub status: Option<DriverStatus>,
}

/// Request para actualizar un conductor existente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDriverRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub license_category: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub assigned_vehicle: Option<String>,
    pub status: Option<DriverStatus>,
    pub image_url: Option<String>,
}
