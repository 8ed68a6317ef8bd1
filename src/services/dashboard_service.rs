//! Servicio de panel de control
//!
//! Resumen de flota calculado sobre los demás stores; no guarda estado.

use serde::Serialize;

use crate::models::auth::Session;
use crate::models::driver::Driver;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::format::format_date_br;

/// Datos del servicio más reciente para la tarjeta del panel
#[derive(Debug, Clone, Serialize)]
pub struct LastServiceInfo {
    pub date: String,
    pub vehicle_plate: String,
    pub vehicle_model: String,
    pub service_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_vehicles: usize,
    pub vehicles_in_service: usize,
    pub total_drivers: usize,
    pub available_drivers: usize,
    pub last_service: Option<LastServiceInfo>,
}

/// Calcula el resumen del panel para la sesión dada
///
/// Un conductor ve solo su vehículo asignado; los registros de
/// mantenimiento deben venir ya filtrados por visibilidad.
pub fn summary(
    session: &Session,
    vehicles: &[Vehicle],
    drivers: &[Driver],
    maintenance: &[&MaintenanceRecord],
) -> DashboardSummary {
    let visible_vehicles: Vec<&Vehicle> = match (session.is_driver(), session.vehicle_id) {
        (true, Some(vehicle_id)) => vehicles.iter().filter(|v| v.id == vehicle_id).collect(),
        _ => vehicles.iter().collect(),
    };

    let vehicles_in_service = visible_vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::InService)
        .count();

    let available_drivers = drivers
        .iter()
        .filter(|d| d.status != crate::models::driver::DriverStatus::InService)
        .count();

    let last_service = maintenance
        .iter()
        .max_by_key(|r| r.date)
        .map(|record| LastServiceInfo {
            date: format_date_br(record.date),
            vehicle_plate: record.vehicle_plate.clone(),
            vehicle_model: vehicles
                .iter()
                .find(|v| v.id == record.vehicle_id)
                .map(|v| v.model.clone())
                .unwrap_or_else(|| "Desconhecido".to_string()),
            service_type: record.service_type.clone(),
        });

    DashboardSummary {
        total_vehicles: visible_vehicles.len(),
        vehicles_in_service,
        total_drivers: drivers.len(),
        available_drivers,
        last_service,
    }
}
