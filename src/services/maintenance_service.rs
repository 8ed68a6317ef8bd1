//! Servicio de mantenimiento
//!
//! Libro de servicios de la flota: lista plana ordenada por fecha
//! descendente, con búsqueda del lado del cliente y agregación de costos.
//! El orden se reaplica después de cada alta o modificación.

use log::info;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::models::auth::Session;
use crate::models::maintenance::{MaintenanceRecord, MaintenanceRequest};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::validate_positive;

pub struct MaintenanceService {
    records: Vec<MaintenanceRecord>,
}

impl MaintenanceService {
    pub fn new(mut records: Vec<MaintenanceRecord>) -> Self {
        sort_by_date_desc(&mut records);
        Self { records }
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    /// Crea un registro de servicio
    ///
    /// La matrícula se copia del vehículo al momento del alta y no se
    /// recalcula si el vehículo cambia de matrícula después.
    pub fn create(
        &mut self,
        request: MaintenanceRequest,
        vehicles: &[Vehicle],
    ) -> AppResult<MaintenanceRecord> {
        let validated = validate_request(&request, vehicles)?;

        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: validated.vehicle_id,
            vehicle_plate: validated.vehicle_plate,
            service_type: validated.service_type,
            description: validated.description,
            location: validated.location,
            date: validated.date,
            cost: validated.cost,
            technician: validated.technician,
            attachment: request.attachment,
            notes: request.notes,
        };

        info!(
            "Servicio registrado: {} para {} ({})",
            record.service_type, record.vehicle_plate, record.date
        );
        self.records.push(record.clone());
        sort_by_date_desc(&mut self.records);
        Ok(record)
    }

    /// Actualiza un registro existente y reordena la lista
    pub fn update(
        &mut self,
        record_id: Uuid,
        request: MaintenanceRequest,
        vehicles: &[Vehicle],
    ) -> AppResult<MaintenanceRecord> {
        let validated = validate_request(&request, vehicles)?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| not_found_error("MaintenanceRecord", &record_id.to_string()))?;

        record.vehicle_id = validated.vehicle_id;
        record.vehicle_plate = validated.vehicle_plate;
        record.service_type = validated.service_type;
        record.description = validated.description;
        record.location = validated.location;
        record.date = validated.date;
        record.cost = validated.cost;
        record.technician = validated.technician;
        record.attachment = request.attachment;
        record.notes = request.notes;
        let updated = record.clone();

        sort_by_date_desc(&mut self.records);
        Ok(updated)
    }

    /// Elimina un registro incondicionalmente
    pub fn delete(&mut self, record_id: Uuid) -> AppResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != record_id);
        if self.records.len() == before {
            return Err(not_found_error("MaintenanceRecord", &record_id.to_string()));
        }
        Ok(())
    }

    /// Registros visibles para la sesión, en orden de fecha descendente
    ///
    /// El término de búsqueda es un substring case-insensitive de la
    /// matrícula, el tipo de servicio o el técnico. Un conductor ve solo
    /// los registros de su vehículo asignado.
    pub fn visible(&self, session: &Session, search: Option<&str>) -> Vec<&MaintenanceRecord> {
        self.records
            .iter()
            .filter(|record| {
                let matches_search = match search {
                    Some(term) if !term.is_empty() => {
                        let term = term.to_lowercase();
                        record.vehicle_plate.to_lowercase().contains(&term)
                            || record.service_type.to_lowercase().contains(&term)
                            || record.technician.to_lowercase().contains(&term)
                    }
                    _ => true,
                };

                let matches_role = match (session.is_driver(), session.vehicle_id) {
                    (true, Some(vehicle_id)) => record.vehicle_id == vehicle_id,
                    _ => true,
                };

                matches_search && matches_role
            })
            .collect()
    }

    /// Costo total del conjunto visible
    pub fn total_cost(&self, session: &Session, search: Option<&str>) -> Decimal {
        self.visible(session, search)
            .iter()
            .map(|r| r.cost)
            .sum()
    }

    /// Servicio más reciente del conjunto visible
    pub fn last_service(&self, session: &Session) -> Option<&MaintenanceRecord> {
        self.visible(session, None).into_iter().next()
    }
}

fn sort_by_date_desc(records: &mut [MaintenanceRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

struct ValidatedRequest {
    vehicle_id: Uuid,
    vehicle_plate: String,
    service_type: String,
    description: String,
    location: String,
    date: chrono::NaiveDate,
    cost: Decimal,
    technician: String,
}

/// Valida todos los campos obligatorios juntando los errores por campo,
/// para que el formulario pueda mostrar un mensaje por cada uno
fn validate_request(
    request: &MaintenanceRequest,
    vehicles: &[Vehicle],
) -> Result<ValidatedRequest, AppError> {
    let mut errors = ValidationErrors::new();

    let vehicle = match request.vehicle_id {
        Some(id) => {
            let found = vehicles.iter().find(|v| v.id == id);
            if found.is_none() {
                errors.add("vehicle_id", required_error("vehicle not found"));
            }
            found
        }
        None => {
            errors.add("vehicle_id", required_error("vehicle is required"));
            None
        }
    };

    let service_type = non_empty(&request.service_type);
    if service_type.is_none() {
        errors.add("service_type", required_error("service type is required"));
    }
    let description = non_empty(&request.description);
    if description.is_none() {
        errors.add("description", required_error("description is required"));
    }
    let location = non_empty(&request.location);
    if location.is_none() {
        errors.add("location", required_error("location is required"));
    }
    if request.date.is_none() {
        errors.add("date", required_error("date is required"));
    }
    match request.cost {
        Some(cost) => {
            if let Err(error) = validate_positive(cost) {
                errors.add("cost", error);
            }
        }
        None => errors.add("cost", required_error("cost is required")),
    }
    let technician = non_empty(&request.technician);
    if technician.is_none() {
        errors.add("technician", required_error("technician is required"));
    }

    match (vehicle, service_type, description, location, request.date, request.cost, technician) {
        (
            Some(vehicle),
            Some(service_type),
            Some(description),
            Some(location),
            Some(date),
            Some(cost),
            Some(technician),
        ) if errors.is_empty() => Ok(ValidatedRequest {
            vehicle_id: vehicle.id,
            vehicle_plate: vehicle.plate.clone(),
            service_type,
            description,
            location,
            date,
            cost,
            technician,
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(message.into());
    error
}
