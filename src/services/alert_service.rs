//! Servicio de alertas
//!
//! Mantiene los recordatorios de mantenimiento y deriva su clasificación
//! de urgencia al momento de la consulta. El estado "expirado" nunca se
//! cachea: se recalcula siempre contra la fecha actual.

use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

use crate::models::alert::{
    Alert, AlertFilters, AlertStatus, AlertStatusFilter, CreateAlertRequest, ExpirationBucket,
};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{not_found_error, validation_error, AppResult};

/// Días hasta el vencimiento (negativo si ya venció)
///
/// Equivale a `ceil((expiración - ahora_ms) / 86_400_000)` del formato
/// original evaluado a granularidad de día: la diferencia de calendario
/// entre ambas fechas.
pub fn days_until_expiration(expires_at: NaiveDate, today: NaiveDate) -> i64 {
    expires_at.signed_duration_since(today).num_days()
}

/// Clasificación de urgencia, primera condición que aplica gana:
/// concluida > vencida > crítica (≤3 días) > alerta (≤7 días) > normal
pub fn expiration_bucket(alert: &Alert, today: NaiveDate) -> ExpirationBucket {
    if alert.status == AlertStatus::Completed {
        return ExpirationBucket::Completed;
    }

    let days = days_until_expiration(alert.expires_at, today);
    if days < 0 {
        ExpirationBucket::Expired
    } else if days <= 3 {
        ExpirationBucket::Critical
    } else if days <= 7 {
        ExpirationBucket::Warning
    } else {
        ExpirationBucket::Normal
    }
}

pub struct AlertService {
    alerts: Vec<Alert>,
}

impl AlertService {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Crea una alerta nueva
    ///
    /// Requiere vehículo existente, descripción no vacía (la personalizada
    /// cuando el tipo es `Other`) y fecha de expiración. Cualquier faltante
    /// rechaza la operación con un error de validación.
    pub fn create(
        &mut self,
        request: CreateAlertRequest,
        vehicles: &[Vehicle],
        today: NaiveDate,
    ) -> AppResult<Alert> {
        let vehicle_id = request
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "vehicle is required"))?;

        // La referencia se valida solo al crear; si el vehículo se elimina
        // después, la alerta queda colgante y eso se tolera
        if !vehicles.iter().any(|v| v.id == vehicle_id) {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }

        let alert_type = request
            .alert_type
            .ok_or_else(|| validation_error("alert_type", "alert type is required"))?;

        let description = if alert_type == crate::models::alert::AlertType::Other {
            request.custom_description
        } else {
            request.description
        };
        let description = description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| validation_error("description", "description is required"))?;

        let expires_at = request
            .expires_at
            .ok_or_else(|| validation_error("expires_at", "expiration date is required"))?;

        let alert = Alert {
            id: Uuid::new_v4(),
            vehicle_id,
            alert_type,
            description,
            created_at: today,
            expires_at,
            completed_at: None,
            priority: request.priority.unwrap_or(crate::models::alert::AlertPriority::Medium),
            status: AlertStatus::Pending,
            notes: request.notes,
        };

        info!("Alerta creada: {} ({})", alert.description, alert.alert_type.as_str());
        self.alerts.push(alert.clone());
        Ok(alert)
    }

    /// Marca una alerta como concluida con fecha de hoy (solo fecha, sin hora)
    pub fn complete(&mut self, alert_id: Uuid, today: NaiveDate) -> AppResult<&Alert> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| not_found_error("Alert", &alert_id.to_string()))?;

        alert.status = AlertStatus::Completed;
        alert.completed_at = Some(today);
        Ok(alert)
    }

    /// Elimina una alerta incondicionalmente (sin soft-delete ni undo)
    pub fn delete(&mut self, alert_id: Uuid) -> AppResult<()> {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != alert_id);
        if self.alerts.len() == before {
            return Err(not_found_error("Alert", &alert_id.to_string()));
        }
        Ok(())
    }

    /// Cantidad de alertas vencidas y no concluidas
    ///
    /// Alimenta la insignia de navegación; se deriva fresca en cada
    /// llamada a partir de la fecha actual.
    pub fn expired_count(&self, today: NaiveDate) -> usize {
        self.alerts
            .iter()
            .filter(|a| {
                a.status != AlertStatus::Completed
                    && days_until_expiration(a.expires_at, today) < 0
            })
            .count()
    }

    /// Lista filtrada por término de búsqueda, estado y vehículo
    ///
    /// El término busca por descripción o matrícula del vehículo asociado.
    /// El filtro de estado compara contra el estado derivado, no el
    /// almacenado: una alerta no concluida con fecha pasada cuenta como
    /// vencida aunque se haya guardado como pendiente.
    pub fn filtered(
        &self,
        filters: &AlertFilters,
        vehicles: &[Vehicle],
        today: NaiveDate,
    ) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|alert| {
                if let Some(term) = &filters.search {
                    let term = term.to_lowercase();
                    let matches_description = alert.description.to_lowercase().contains(&term);
                    let matches_plate = vehicles
                        .iter()
                        .find(|v| v.id == alert.vehicle_id)
                        .map(|v| v.plate.to_lowercase().contains(&term))
                        .unwrap_or(false);
                    if !matches_description && !matches_plate {
                        return false;
                    }
                }

                if let Some(status) = filters.status {
                    let completed = alert.status == AlertStatus::Completed;
                    let expired = !completed
                        && days_until_expiration(alert.expires_at, today) < 0;
                    let keep = match status {
                        AlertStatusFilter::Pending => !completed && !expired,
                        AlertStatusFilter::Completed => completed,
                        AlertStatusFilter::Expired => expired,
                    };
                    if !keep {
                        return false;
                    }
                }

                if let Some(vehicle_id) = filters.vehicle_id {
                    if alert.vehicle_id != vehicle_id {
                        return false;
                    }
                }

                true
            })
            .collect()
    }
}
