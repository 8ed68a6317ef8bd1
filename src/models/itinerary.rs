//! Modelo de ItineraryPhoto
//!
//! Fotos del panel de instrumentos que registran los viajes. Dos fotos
//! que comparten `itinerary_id` forman un viaje de ida y vuelta; las
//! fotos legadas sin identificador se agrupan por heurística temporal
//! (ver services::itinerary_service).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Posición de la foto dentro del viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripPosition {
    Start,
    End,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPhoto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub photo_url: String,
    pub timestamp: DateTime<Utc>,
    pub odometer: Option<String>,
    pub notes: Option<String>,
    pub driver_name: Option<String>,
    pub itinerary_id: Option<Uuid>,
    pub position: Option<TripPosition>,
    /// Dirección de destino del tramo de retorno. Campo estructurado que
    /// reemplaza el prefijo literal "Destino da Viagem: " embebido en
    /// `notes` en el formato de datos original.
    pub destination_address: Option<String>,
}

/// Prefijo del formato legado, mantenido para ingestar registros antiguos
pub const LEGACY_DESTINATION_PREFIX: &str = "Destino da Viagem:";

impl ItineraryPhoto {
    /// Extrae la dirección de destino del campo `notes` con el prefijo legado
    pub fn destination_from_notes(notes: &str) -> Option<String> {
        notes
            .strip_prefix(LEGACY_DESTINATION_PREFIX)
            .map(|rest| rest.trim().to_string())
            .filter(|address| !address.is_empty())
    }
}

/// Datos para registrar un viaje completo (ida y retorno)
#[derive(Debug, Clone, Deserialize)]
pub struct NewRoundTrip {
    pub start_photo_url: String,
    pub end_photo_url: String,
    pub destination_address: String,
    pub start_timestamp: Option<DateTime<Utc>>,
    pub end_timestamp: Option<DateTime<Utc>>,
}

/// Cambios aplicables a una foto existente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditPhoto {
    /// Nueva imagen; al reemplazarla el timestamp pasa a ser "ahora"
    pub photo_url: Option<String>,
    /// Solo tiene efecto sobre fotos de retorno
    pub destination_address: Option<String>,
}
