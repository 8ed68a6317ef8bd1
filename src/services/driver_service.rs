//! Servicio de conductores
//!
//! CRUD en memoria sobre el plantel de conductores, con la misma forma
//! que el servicio de vehículos.

use log::info;
use uuid::Uuid;

use crate::models::driver::{CreateDriverRequest, Driver, DriverStatus, UpdateDriverRequest};
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct DriverService {
    drivers: Vec<Driver>,
}

impl DriverService {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn find(&self, driver_id: Uuid) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == driver_id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.name == name)
    }

    pub fn create(&mut self, request: CreateDriverRequest) -> AppResult<Driver> {
        let name = request
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| validation_error("name", "name is required"))?;
        let license_number = request
            .license_number
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| validation_error("license_number", "license number is required"))?;
        let license_expiry = request
            .license_expiry
            .ok_or_else(|| validation_error("license_expiry", "license expiry is required"))?;
        let birth_date = request
            .birth_date
            .ok_or_else(|| validation_error("birth_date", "birth date is required"))?;

        let driver = Driver {
            id: Uuid::new_v4(),
            name,
            cpf: request.cpf.unwrap_or_default(),
            license_number,
            license_category: request.license_category.unwrap_or_else(|| "B".to_string()),
            license_expiry,
            birth_date,
            phone: request.phone.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            address: request.address.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            state: request.state.unwrap_or_default(),
            postal_code: request.postal_code.unwrap_or_default(),
            assigned_vehicle: request.assigned_vehicle,
            status: request.status.unwrap_or(DriverStatus::Available),
            image_url: None,
        };

        info!("Conductor registrado: {}", driver.name);
        self.drivers.push(driver.clone());
        Ok(driver)
    }

    pub fn update(&mut self, driver_id: Uuid, request: UpdateDriverRequest) -> AppResult<&Driver> {
        let driver = self
            .drivers
            .iter_mut()
            .find(|d| d.id == driver_id)
            .ok_or_else(|| not_found_error("Driver", &driver_id.to_string()))?;

        if let Some(name) = request.name {
            driver.name = name;
        }
        if let Some(phone) = request.phone {
            driver.phone = phone;
        }
        if let Some(email) = request.email {
            driver.email = email;
        }
        if let Some(address) = request.address {
            driver.address = address;
        }
        if let Some(city) = request.city {
            driver.city = city;
        }
        if let Some(state) = request.state {
            driver.state = state;
        }
        if let Some(postal_code) = request.postal_code {
            driver.postal_code = postal_code;
        }
        if let Some(license_category) = request.license_category {
            driver.license_category = license_category;
        }
        if let Some(license_expiry) = request.license_expiry {
            driver.license_expiry = license_expiry;
        }
        if let Some(assigned_vehicle) = request.assigned_vehicle {
            driver.assigned_vehicle = Some(assigned_vehicle);
        }
        if let Some(status) = request.status {
            driver.status = status;
        }
        if let Some(image_url) = request.image_url {
            driver.image_url = Some(image_url);
        }

        Ok(driver)
    }

    pub fn delete(&mut self, driver_id: Uuid) -> AppResult<()> {
        let before = self.drivers.len();
        self.drivers.retain(|d| d.id != driver_id);
        if self.drivers.len() == before {
            return Err(not_found_error("Driver", &driver_id.to_string()));
        }
        Ok(())
    }

    /// Conductores disponibles (estado distinto de "en servicio")
    pub fn available_count(&self) -> usize {
        self.drivers
            .iter()
            .filter(|d| d.status != DriverStatus::InService)
            .count()
    }
}
