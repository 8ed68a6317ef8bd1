//! Servicio de itinerarios
//!
//! Agrupa las fotos de panel en viajes de ida y vuelta. Hay dos caminos:
//! agrupación explícita por `itinerary_id`, y una heurística de ventana
//! temporal de 60 segundos para conjuntos legados sin identificador.

use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use crate::models::auth::Session;
use crate::models::itinerary::{EditPhoto, ItineraryPhoto, NewRoundTrip, TripPosition};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::format::{format_datetime_br, format_trip_duration};

/// Ventana máxima entre dos fotos del mismo conductor para emparejarlas
/// en el camino heurístico
pub const PAIRING_WINDOW_MS: i64 = 60_000;

/// Agrupa fotos en viajes, listos para mostrar (viaje más reciente primero)
///
/// Función pura sobre la lista ordenada de fotos:
/// 1. Si alguna foto trae `itinerary_id`, se agrupa por identificador;
///    dentro del grupo la partida ordena antes que el retorno y los empates
///    se resuelven por timestamp ascendente. Las fotos sin identificador
///    quedan fuera en este camino.
/// 2. Si ninguna foto trae identificador (datos legados), se recorre en el
///    orden original emparejando cada foto con la primera otra foto no
///    procesada del mismo conductor cuyo timestamp caiga dentro de la
///    ventana de 60 segundos; las que no emparejan forman grupos de una.
/// 3. Los grupos se ordenan por su timestamp máximo, descendente.
pub fn group_trips(photos: &[ItineraryPhoto]) -> Vec<Vec<ItineraryPhoto>> {
    let mut by_itinerary: Vec<(Uuid, Vec<ItineraryPhoto>)> = Vec::new();
    for photo in photos {
        if let Some(itinerary_id) = photo.itinerary_id {
            match by_itinerary.iter_mut().find(|(id, _)| *id == itinerary_id) {
                Some((_, group)) => group.push(photo.clone()),
                None => by_itinerary.push((itinerary_id, vec![photo.clone()])),
            }
        }
    }

    if !by_itinerary.is_empty() {
        let mut groups: Vec<Vec<ItineraryPhoto>> = by_itinerary
            .into_iter()
            .map(|(_, mut group)| {
                group.sort_by(|a, b| {
                    let rank = |p: &ItineraryPhoto| {
                        if p.position == Some(TripPosition::Start) { -1 } else { 1 }
                    };
                    rank(a).cmp(&rank(b)).then(a.timestamp.cmp(&b.timestamp))
                });
                group
            })
            .collect();

        groups.sort_by_key(|group| {
            std::cmp::Reverse(group.iter().map(|p| p.timestamp).max())
        });
        return groups;
    }

    // Camino de compatibilidad: emparejamiento heurístico para fotos legadas
    let mut groups: Vec<Vec<ItineraryPhoto>> = Vec::new();
    let mut processed: Vec<Uuid> = Vec::new();
    for photo in photos {
        if processed.contains(&photo.id) {
            continue;
        }
        let partner = photos.iter().find(|other| {
            other.id != photo.id
                && other.driver_name == photo.driver_name
                && !processed.contains(&other.id)
                && (other.timestamp - photo.timestamp).num_milliseconds().abs()
                    <= PAIRING_WINDOW_MS
        });
        match partner {
            Some(partner) => {
                processed.push(photo.id);
                processed.push(partner.id);
                groups.push(vec![photo.clone(), partner.clone()]);
            }
            None => {
                processed.push(photo.id);
                groups.push(vec![photo.clone()]);
            }
        }
    }

    groups.sort_by_key(|group| {
        std::cmp::Reverse(group.iter().map(|p| p.timestamp).max())
    });
    groups
}

/// Vista de un grupo como viaje: foto de partida y retorno opcional
pub struct TripView<'a> {
    pub start: Option<&'a ItineraryPhoto>,
    pub end: Option<&'a ItineraryPhoto>,
}

impl<'a> TripView<'a> {
    pub fn from_group(group: &'a [ItineraryPhoto]) -> Self {
        let start = group
            .iter()
            .find(|p| p.position == Some(TripPosition::Start))
            .or_else(|| group.first());
        let end = group
            .iter()
            .find(|p| p.position == Some(TripPosition::End))
            .or_else(|| if group.len() > 1 { group.get(1) } else { None });
        Self { start, end }
    }

    /// Duración total del viaje cuando ambas fotos existen
    pub fn total_duration(&self) -> Option<String> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                Some(format_trip_duration(start.timestamp, end.timestamp))
            }
            _ => None,
        }
    }
}

pub struct ItineraryService {
    photos: Vec<ItineraryPhoto>,
}

impl ItineraryService {
    pub fn new(photos: Vec<ItineraryPhoto>) -> Self {
        Self { photos }
    }

    pub fn photos(&self) -> &[ItineraryPhoto] {
        &self.photos
    }

    /// Fotos visibles para la sesión: un conductor ve solo las de su vehículo
    pub fn visible_photos(&self, session: &Session) -> Vec<&ItineraryPhoto> {
        match (session.is_driver(), session.vehicle_id) {
            (true, Some(vehicle_id)) => self
                .photos
                .iter()
                .filter(|p| p.vehicle_id == vehicle_id)
                .collect(),
            _ => self.photos.iter().collect(),
        }
    }

    /// Viajes agrupados para la sesión, con búsqueda opcional (solo admin)
    ///
    /// El término de búsqueda compara contra el nombre del conductor o la
    /// fecha formateada (dd/mm/aaaa hh:mm) de cada foto.
    pub fn grouped_trips(&self, session: &Session, search: Option<&str>) -> Vec<Vec<ItineraryPhoto>> {
        let visible = self.visible_photos(session);
        let filtered: Vec<ItineraryPhoto> = match search {
            Some(term) if !term.is_empty() && !session.is_driver() => {
                let term = term.to_lowercase();
                visible
                    .into_iter()
                    .filter(|p| {
                        let matches_driver = p
                            .driver_name
                            .as_deref()
                            .map(|n| n.to_lowercase().contains(&term))
                            .unwrap_or(false);
                        let matches_date =
                            format_datetime_br(p.timestamp).to_lowercase().contains(&term);
                        matches_driver || matches_date
                    })
                    .cloned()
                    .collect()
            }
            _ => visible.into_iter().cloned().collect(),
        };
        group_trips(&filtered)
    }

    /// Registra un viaje completo: dos fotos con un `itinerary_id` recién
    /// generado, posiciones explícitas y timestamps independientes
    /// (por defecto "ahora"). Se insertan al inicio del registro.
    pub fn add_round_trip(
        &mut self,
        session: &Session,
        trip: NewRoundTrip,
        now: DateTime<Utc>,
    ) -> Uuid {
        let itinerary_id = Uuid::new_v4();
        let vehicle_id = session.vehicle_id.unwrap_or_default();

        let start_photo = ItineraryPhoto {
            id: Uuid::new_v4(),
            vehicle_id,
            driver_id: session.driver_id,
            photo_url: trip.start_photo_url,
            timestamp: trip.start_timestamp.unwrap_or(now),
            odometer: None,
            notes: Some("Partida".to_string()),
            driver_name: Some(session.username.clone()),
            itinerary_id: Some(itinerary_id),
            position: Some(TripPosition::Start),
            destination_address: None,
        };

        let end_photo = ItineraryPhoto {
            id: Uuid::new_v4(),
            vehicle_id,
            driver_id: session.driver_id,
            photo_url: trip.end_photo_url,
            timestamp: trip.end_timestamp.unwrap_or(now),
            odometer: None,
            notes: None,
            driver_name: Some(session.username.clone()),
            itinerary_id: Some(itinerary_id),
            position: Some(TripPosition::End),
            destination_address: Some(trip.destination_address),
        };

        info!("Viaje registrado por {} (itinerario {})", session.username, itinerary_id);
        self.photos.insert(0, end_photo);
        self.photos.insert(0, start_photo);
        itinerary_id
    }

    /// Agrega el tramo de retorno a un viaje que solo tiene partida
    ///
    /// Si la foto base no tiene `itinerary_id` (registro legado), se le
    /// asigna retroactivamente usando su propio id como identificador
    /// compartido antes de insertar la foto de retorno.
    pub fn add_return_leg(
        &mut self,
        base_photo_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Uuid> {
        let base = self
            .photos
            .iter_mut()
            .find(|p| p.id == base_photo_id)
            .ok_or_else(|| not_found_error("ItineraryPhoto", &base_photo_id.to_string()))?;

        let itinerary_id = match base.itinerary_id {
            Some(id) => id,
            None => {
                base.itinerary_id = Some(base.id);
                base.id
            }
        };

        let return_photo = ItineraryPhoto {
            id: Uuid::new_v4(),
            vehicle_id: base.vehicle_id,
            driver_id: base.driver_id,
            photo_url: String::new(),
            timestamp: now,
            odometer: None,
            notes: Some("Retorno".to_string()),
            driver_name: base.driver_name.clone(),
            itinerary_id: Some(itinerary_id),
            position: Some(TripPosition::End),
            destination_address: None,
        };

        let return_id = return_photo.id;
        self.photos.insert(0, return_photo);
        Ok(return_id)
    }

    /// Edita una foto: puede reemplazar la imagen (el timestamp pasa a ser
    /// "ahora") y, solo en fotos de retorno, la dirección de destino
    pub fn edit_photo(
        &mut self,
        photo_id: Uuid,
        changes: EditPhoto,
        now: DateTime<Utc>,
    ) -> AppResult<&ItineraryPhoto> {
        let photo = self
            .photos
            .iter_mut()
            .find(|p| p.id == photo_id)
            .ok_or_else(|| not_found_error("ItineraryPhoto", &photo_id.to_string()))?;

        if let Some(photo_url) = changes.photo_url {
            photo.photo_url = photo_url;
            photo.timestamp = now;
        }

        if photo.position == Some(TripPosition::End) {
            if let Some(address) = changes.destination_address {
                photo.destination_address =
                    if address.is_empty() { None } else { Some(address) };
            }
        }

        Ok(photo)
    }

    /// Elimina una foto incondicionalmente, sin cascada a su pareja
    pub fn delete_photo(&mut self, photo_id: Uuid) -> AppResult<()> {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != photo_id);
        if self.photos.len() == before {
            return Err(not_found_error("ItineraryPhoto", &photo_id.to_string()));
        }
        Ok(())
    }
}
