//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del panel de flota.

pub mod alert;
pub mod auth;
pub mod driver;
pub mod infraction;
pub mod itinerary;
pub mod maintenance;
pub mod vehicle;
