//! Modelo de Alert
//!
//! Recordatorios de mantenimiento por vehículo. El estado `Expired`
//! almacenado es solo informativo: la clasificación visible se deriva
//! siempre de la fecha actual (ver services::alert_service).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipo de alerta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    OilChange,
    Battery,
    Tire,
    Inspection,
    Document,
    Other,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::OilChange => "oil-change",
            AlertType::Battery => "battery",
            AlertType::Tire => "tire",
            AlertType::Inspection => "inspection",
            AlertType::Document => "document",
            AlertType::Other => "other",
        }
    }
}

/// Prioridad de la alerta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

/// Estado almacenado de la alerta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Pending,
    Completed,
    Expired,
}

/// Clasificación derivada de urgencia, calculada al momento de la consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpirationBucket {
    Completed,
    Expired,
    Critical,
    Warning,
    Normal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    /// Referencia débil: se valida al crear, puede quedar colgante
    /// si el vehículo se elimina después
    pub vehicle_id: Uuid,
    pub alert_type: AlertType,
    pub description: String,
    pub created_at: NaiveDate,
    pub expires_at: NaiveDate,
    pub completed_at: Option<NaiveDate>,
    pub priority: AlertPriority,
    pub status: AlertStatus,
    pub notes: Option<String>,
}

/// Request para crear una nueva alerta
///
/// Los campos opcionales reflejan el formulario de origen; la validación
/// rechaza la creación cuando falta alguno de los obligatorios.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAlertRequest {
    pub vehicle_id: Option<Uuid>,
    pub alert_type: Option<AlertType>,
    pub description: Option<String>,
    /// Descripción libre, usada cuando el tipo es `Other`
    pub custom_description: Option<String>,
    pub expires_at: Option<NaiveDate>,
    pub priority: Option<AlertPriority>,
    pub notes: Option<String>,
}

/// Filtros de búsqueda de alertas
#[derive(Debug, Clone, Default)]
pub struct AlertFilters {
    pub search: Option<String>,
    pub status: Option<AlertStatusFilter>,
    pub vehicle_id: Option<Uuid>,
}

/// Filtro de estado: compara contra el estado derivado de la fecha
/// actual, no contra el estado almacenado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatusFilter {
    Pending,
    Completed,
    Expired,
}
