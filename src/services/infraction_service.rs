//! Servicio de infracciones
//!
//! Registro de multas. El nombre del conductor se copia del vehículo al
//! momento del alta (snapshot intencional, no un join en vivo).

use log::info;
use uuid::Uuid;

use crate::models::auth::Session;
use crate::models::infraction::{CreateInfractionRequest, Infraction};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct InfractionService {
    infractions: Vec<Infraction>,
}

impl InfractionService {
    pub fn new(infractions: Vec<Infraction>) -> Self {
        Self { infractions }
    }

    pub fn infractions(&self) -> &[Infraction] {
        &self.infractions
    }

    /// Infracciones visibles: el admin ve todas, un conductor solo las de
    /// su vehículo asignado
    pub fn visible(&self, session: &Session) -> Vec<&Infraction> {
        match (session.is_driver(), session.vehicle_id) {
            (true, Some(vehicle_id)) => self
                .infractions
                .iter()
                .filter(|i| i.vehicle_id == vehicle_id)
                .collect(),
            _ => self.infractions.iter().collect(),
        }
    }

    /// Registra una infracción; se inserta al inicio (más reciente primero)
    pub fn create(
        &mut self,
        request: CreateInfractionRequest,
        vehicles: &[Vehicle],
    ) -> AppResult<Infraction> {
        let vehicle_id = request
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "vehicle is required"))?;
        let description = request
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| validation_error("description", "description is required"))?;
        let date = request
            .date
            .ok_or_else(|| validation_error("date", "date is required"))?;
        let address = request
            .address
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| validation_error("address", "address is required"))?;

        let driver_name = vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .map(|v| v.driver_name.clone())
            .unwrap_or_else(|| "-".to_string());

        let infraction = Infraction {
            id: Uuid::new_v4(),
            vehicle_id,
            driver_name,
            date,
            address,
            description,
            attachment: request.attachment,
        };

        info!("Infracción registrada: {} ({})", infraction.description, infraction.date);
        self.infractions.insert(0, infraction.clone());
        Ok(infraction)
    }

    pub fn delete(&mut self, infraction_id: Uuid) -> AppResult<()> {
        let before = self.infractions.len();
        self.infractions.retain(|i| i.id != infraction_id);
        if self.infractions.len() == before {
            return Err(not_found_error("Infraction", &infraction_id.to_string()));
        }
        Ok(())
    }
}
