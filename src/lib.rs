//! Panel de gestión de flota
//!
//! Motor en memoria del panel: autenticación simulada, alertas de
//! mantenimiento con clasificación por vencimiento, emparejamiento de
//! fotos de itinerario en viajes, libro de servicios y registros de
//! vehículos, conductores e infracciones. Todo el estado vive en
//! memoria y se siembra desde los datos de ejemplo de `data`.

pub mod data;
pub mod models;
pub mod services;
pub mod utils;
