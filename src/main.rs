use anyhow::Result;
use chrono::Utc;
use log::{debug, info};

use fleet_management::data;
use fleet_management::models::auth::LoginRequest;
use fleet_management::services::alert_service::AlertService;
use fleet_management::services::auth_service::AuthService;
use fleet_management::services::dashboard_service;
use fleet_management::services::driver_service::DriverService;
use fleet_management::services::itinerary_service::ItineraryService;
use fleet_management::services::maintenance_service::MaintenanceService;
use fleet_management::services::vehicle_service::VehicleService;
use fleet_management::utils::format::format_currency_brl;

fn main() -> Result<()> {
    // Configurar logging
    env_logger::init();

    info!("🚐 Fleet Management - Panel de gestión de flota");
    info!("===============================================");

    // Sembrar el estado en memoria
    let vehicles = data::seed_vehicles();
    let drivers = data::seed_drivers();
    let accounts = data::seed_accounts(&vehicles, &drivers);

    let alert_service = AlertService::new(data::seed_alerts(&vehicles));
    let maintenance_service = MaintenanceService::new(data::seed_maintenance(&vehicles));
    let itinerary_service = ItineraryService::new(data::seed_itinerary_photos(&vehicles, &drivers));
    let vehicle_service = VehicleService::new(vehicles);
    let driver_service = DriverService::new(drivers);
    let mut auth_service = AuthService::new(accounts);

    // Sesión de demostración como administrador
    let session = auth_service.login(&LoginRequest {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    })?;

    let today = Utc::now().date_naive();
    let visible_maintenance = maintenance_service.visible(&session, None);
    let summary = dashboard_service::summary(
        &session,
        vehicle_service.vehicles(),
        driver_service.drivers(),
        &visible_maintenance,
    );

    debug!("Resumen del panel: {}", serde_json::to_string(&summary)?);

    info!(
        "🚚 Flota: {} vehículos ({} en servicio)",
        summary.total_vehicles, summary.vehicles_in_service
    );
    info!(
        "🧑 Conductores: {} ({} disponibles)",
        summary.total_drivers, summary.available_drivers
    );
    if let Some(last) = &summary.last_service {
        info!(
            "🔧 Último servicio: {} - {} ({})",
            last.date, last.service_type, last.vehicle_plate
        );
    }
    info!(
        "💰 Costo total de mantenimiento: {}",
        format_currency_brl(maintenance_service.total_cost(&session, None))
    );
    info!("🔔 Alertas vencidas: {}", alert_service.expired_count(today));
    info!(
        "🗺️ Viajes registrados: {}",
        itinerary_service.grouped_trips(&session, None).len()
    );

    auth_service.logout();
    Ok(())
}
