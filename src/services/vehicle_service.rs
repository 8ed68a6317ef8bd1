//! Servicio de vehículos
//!
//! CRUD en memoria sobre la flota. El admin modifica cualquier vehículo;
//! un conductor solo ve el vehículo asignado a su sesión.

use chrono::NaiveDate;
use log::{info, warn};
use uuid::Uuid;

use crate::models::auth::Session;
use crate::models::vehicle::{
    CreateVehicleRequest, NewVehicleDocument, PhotoSlot, UpdateVehicleRequest, Vehicle,
    VehicleDocument, VehiclePhotos, VehicleStatus,
};
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::{validate_license_plate, validate_pdf_mime};

pub struct VehicleService {
    vehicles: Vec<Vehicle>,
}

impl VehicleService {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehículos visibles para la sesión
    pub fn visible(&self, session: &Session) -> Vec<&Vehicle> {
        match (session.is_driver(), session.vehicle_id) {
            (true, Some(vehicle_id)) => self
                .vehicles
                .iter()
                .filter(|v| v.id == vehicle_id)
                .collect(),
            _ => self.vehicles.iter().collect(),
        }
    }

    pub fn find(&self, vehicle_id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    pub fn create(&mut self, request: CreateVehicleRequest, today: NaiveDate) -> AppResult<Vehicle> {
        let plate = request
            .plate
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| validation_error("plate", "plate is required"))?;
        validate_license_plate(&plate).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("plate", e);
            AppError::Validation(errors)
        })?;

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            plate,
            brand: request.brand.unwrap_or_default(),
            model: request.model.unwrap_or_default(),
            status: request.status.unwrap_or(VehicleStatus::InService),
            driver_name: request.driver_name.unwrap_or_else(|| "-".to_string()),
            odometer: request.odometer.unwrap_or_default(),
            fuel_type: request.fuel_type.unwrap_or_default(),
            year: request.year.unwrap_or(0),
            color: request.color.unwrap_or_default(),
            acquired_at: request.acquired_at.unwrap_or(today),
            image_url: request.image_url,
            photos: VehiclePhotos::default(),
            documents: Vec::new(),
        };

        info!("Vehículo creado: {} {} {}", vehicle.plate, vehicle.brand, vehicle.model);
        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    /// Actualiza en el lugar los campos presentes del request
    pub fn update(&mut self, vehicle_id: Uuid, request: UpdateVehicleRequest) -> AppResult<&Vehicle> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        if let Some(plate) = request.plate {
            vehicle.plate = plate;
        }
        if let Some(brand) = request.brand {
            vehicle.brand = brand;
        }
        if let Some(model) = request.model {
            vehicle.model = model;
        }
        if let Some(driver_name) = request.driver_name {
            vehicle.driver_name = driver_name;
        }
        if let Some(status) = request.status {
            vehicle.status = status;
        }
        if let Some(odometer) = request.odometer {
            vehicle.odometer = odometer;
        }
        if let Some(fuel_type) = request.fuel_type {
            vehicle.fuel_type = fuel_type;
        }
        if let Some(year) = request.year {
            vehicle.year = year;
        }
        if let Some(color) = request.color {
            vehicle.color = color;
        }
        if let Some(image_url) = request.image_url {
            vehicle.image_url = Some(image_url);
        }

        Ok(vehicle)
    }

    /// Elimina un vehículo; las alertas que lo referencian quedan colgantes
    /// y eso se tolera (no hay integridad referencial forzada)
    pub fn delete(&mut self, vehicle_id: Uuid) -> AppResult<()> {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != vehicle_id);
        if self.vehicles.len() == before {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }
        Ok(())
    }

    /// Adjunta un documento al vehículo; solo se aceptan archivos PDF,
    /// cualquier otro tipo descarta la selección con un error bloqueante
    pub fn add_document(
        &mut self,
        vehicle_id: Uuid,
        document: NewVehicleDocument,
        today: NaiveDate,
    ) -> AppResult<VehicleDocument> {
        if let Err(error) = validate_pdf_mime(&document.mime_type) {
            warn!("Documento rechazado para {}: tipo {}", vehicle_id, document.mime_type);
            let mut errors = validator::ValidationErrors::new();
            errors.add("file", error);
            return Err(AppError::Validation(errors));
        }

        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let entry = VehicleDocument {
            id: Uuid::new_v4(),
            name: document.name,
            doc_type: document.doc_type,
            uploaded_at: today,
            file_url: document.file_url,
            description: document.description,
        };
        vehicle.documents.push(entry.clone());
        Ok(entry)
    }

    /// Carga una foto en una de las doce posiciones fijas del vehículo
    ///
    /// Las URLs son transitorias (object/data URLs); no hay persistencia.
    pub fn set_photo(&mut self, vehicle_id: Uuid, slot: PhotoSlot, url: String) -> AppResult<()> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let photos = &mut vehicle.photos;
        let target = match slot {
            PhotoSlot::Front => &mut photos.front,
            PhotoSlot::RightSide => &mut photos.right_side,
            PhotoSlot::LeftSide => &mut photos.left_side,
            PhotoSlot::Rear => &mut photos.rear,
            PhotoSlot::InstrumentPanel => &mut photos.instrument_panel,
            PhotoSlot::Gearbox => &mut photos.gearbox,
            PhotoSlot::Dashboard => &mut photos.dashboard,
            PhotoSlot::Engine => &mut photos.engine,
            PhotoSlot::FrontRightTire => &mut photos.front_right_tire,
            PhotoSlot::FrontLeftTire => &mut photos.front_left_tire,
            PhotoSlot::RearRightTire => &mut photos.rear_right_tire,
            PhotoSlot::RearLeftTire => &mut photos.rear_left_tire,
        };
        *target = Some(url);
        Ok(())
    }
}
