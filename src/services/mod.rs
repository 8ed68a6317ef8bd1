//! Servicios del sistema
//!
//! Cada servicio mantiene su colección en memoria y expone las
//! operaciones de negocio sobre ella. Las operaciones con visibilidad
//! por rol reciben la sesión explícitamente.

pub mod alert_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod driver_service;
pub mod infraction_service;
pub mod itinerary_service;
pub mod maintenance_service;
pub mod vehicle_service;
