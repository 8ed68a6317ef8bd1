//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    InService,
    InMaintenance,
    OutOfService,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::InService => "in-service",
            VehicleStatus::InMaintenance => "in-maintenance",
            VehicleStatus::OutOfService => "out-of-service",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in-service" => Some(VehicleStatus::InService),
            "in-maintenance" => Some(VehicleStatus::InMaintenance),
            "out-of-service" => Some(VehicleStatus::OutOfService),
            _ => None,
        }
    }
}

/// Conjunto fijo de fotos del vehículo (doce posiciones)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehiclePhotos {
    pub front: Option<String>,
    pub right_side: Option<String>,
    pub left_side: Option<String>,
    pub rear: Option<String>,
    pub instrument_panel: Option<String>,
    pub gearbox: Option<String>,
    pub dashboard: Option<String>,
    pub engine: Option<String>,
    pub front_right_tire: Option<String>,
    pub front_left_tire: Option<String>,
    pub rear_right_tire: Option<String>,
    pub rear_left_tire: Option<String>,
}

/// Posición de foto dentro del conjunto del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoSlot {
    Front,
    RightSide,
    LeftSide,
    Rear,
    InstrumentPanel,
    Gearbox,
    Dashboard,
    Engine,
    FrontRightTire,
    FrontLeftTire,
    RearRightTire,
    RearLeftTire,
}

/// Documento adjunto al vehículo (solo PDF)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDocument {
    pub id: Uuid,
    pub name: String,
    pub doc_type: String,
    pub uploaded_at: NaiveDate,
    pub file_url: Option<String>,
    pub description: Option<String>,
}

/// Vehicle principal de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub status: VehicleStatus,
    /// Nombre del conductor asignado ("-" cuando no hay)
    pub driver_name: String,
    pub odometer: String,
    pub fuel_type: String,
    pub year: i32,
    pub color: String,
    pub acquired_at: NaiveDate,
    pub image_url: Option<String>,
    pub photos: VehiclePhotos,
    pub documents: Vec<VehicleDocument>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVehicleRequest {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub driver_name: Option<String>,
    pub status: Option<VehicleStatus>,
    pub odometer: Option<String>,
    pub fuel_type: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub acquired_at: Option<NaiveDate>,
    pub image_url: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicleRequest {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub driver_name: Option<String>,
    pub status: Option<VehicleStatus>,
    pub odometer: Option<String>,
    pub fuel_type: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

/// Request para adjuntar un documento al vehículo
#[derive(Debug, Clone, Deserialize)]
pub struct NewVehicleDocument {
    pub name: String,
    pub doc_type: String,
    pub mime_type: String,
    pub file_url: Option<String>,
    pub description: Option<String>,
}
