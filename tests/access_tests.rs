use chrono::NaiveDate;

use fleet_management::data;
use fleet_management::models::auth::LoginRequest;
use fleet_management::models::infraction::CreateInfractionRequest;
use fleet_management::services::auth_service::AuthService;
use fleet_management::services::dashboard_service;
use fleet_management::services::infraction_service::InfractionService;
use fleet_management::services::maintenance_service::MaintenanceService;
use fleet_management::services::vehicle_service::VehicleService;
use fleet_management::utils::errors::AppError;

fn login(auth: &mut AuthService, username: &str, password: &str) -> fleet_management::models::auth::Session {
    auth.login(&LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
    .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_only_seeded_credential_pairs_are_valid() {
    let vehicles = data::seed_vehicles();
    let drivers = data::seed_drivers();
    let mut auth = AuthService::new(data::seed_accounts(&vehicles, &drivers));

    // Los tres pares válidos
    assert!(login(&mut auth, "admin", "admin123").is_admin());
    assert!(login(&mut auth, "joao", "motorista123").is_driver());
    assert!(login(&mut auth, "maria", "motorista123").is_driver());

    // Combinaciones cruzadas fallan
    for (username, password) in [
        ("admin", "motorista123"),
        ("joao", "admin123"),
        ("desconhecido", "admin123"),
        ("admin", ""),
    ] {
        let result = auth.login(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        });
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}

#[test]
fn test_driver_session_restricts_fleet_view() {
    let vehicles = data::seed_vehicles();
    let drivers = data::seed_drivers();
    let mut auth = AuthService::new(data::seed_accounts(&vehicles, &drivers));
    let service = VehicleService::new(vehicles.clone());

    let admin = login(&mut auth, "admin", "admin123");
    assert_eq!(service.visible(&admin).len(), 4);

    let joao = login(&mut auth, "joao", "motorista123");
    let visible = service.visible(&joao);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].plate, "SGF1525");

    let maria = login(&mut auth, "maria", "motorista123");
    assert_eq!(service.visible(&maria)[0].plate, "ABC1234");
}

#[test]
fn test_infraction_visibility_and_driver_snapshot() {
    let vehicles = data::seed_vehicles();
    let drivers = data::seed_drivers();
    let mut auth = AuthService::new(data::seed_accounts(&vehicles, &drivers));
    let mut service = InfractionService::new(data::seed_infractions());

    // El registro arranca vacío
    assert!(service.infractions().is_empty());

    let kangoo = vehicles.iter().find(|v| v.plate == "SGF1525").unwrap();
    let transit = vehicles.iter().find(|v| v.plate == "ABC1234").unwrap();

    let infraction = service
        .create(
            CreateInfractionRequest {
                vehicle_id: Some(kangoo.id),
                date: Some(date(2024, 6, 10)),
                address: Some("Av. Paulista, 900".to_string()),
                description: Some("Excesso de velocidade".to_string()),
                attachment: None,
            },
            &vehicles,
        )
        .unwrap();
    // El nombre del conductor se copia del vehículo al crear
    assert_eq!(infraction.driver_name, "João Silva");

    service
        .create(
            CreateInfractionRequest {
                vehicle_id: Some(transit.id),
                date: Some(date(2024, 6, 12)),
                address: Some("Rua Augusta, 300".to_string()),
                description: Some("Estacionamento irregular".to_string()),
                attachment: None,
            },
            &vehicles,
        )
        .unwrap();

    // La más reciente queda primera
    assert_eq!(service.infractions()[0].description, "Estacionamento irregular");

    let admin = login(&mut auth, "admin", "admin123");
    assert_eq!(service.visible(&admin).len(), 2);

    let joao = login(&mut auth, "joao", "motorista123");
    let visible = service.visible(&joao);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].vehicle_id, kangoo.id);
}

#[test]
fn test_infraction_requires_all_fields() {
    let vehicles = data::seed_vehicles();
    let mut service = InfractionService::new(Vec::new());

    let result = service.create(
        CreateInfractionRequest {
            vehicle_id: Some(vehicles[0].id),
            date: Some(date(2024, 6, 10)),
            address: Some("   ".to_string()),
            description: Some("Excesso de velocidade".to_string()),
            attachment: None,
        },
        &vehicles,
    );
    assert!(result.is_err());
    assert!(service.infractions().is_empty());
}

#[test]
fn test_dashboard_summary_per_role() {
    let vehicles = data::seed_vehicles();
    let drivers = data::seed_drivers();
    let mut auth = AuthService::new(data::seed_accounts(&vehicles, &drivers));
    let maintenance = MaintenanceService::new(data::seed_maintenance(&vehicles));

    let admin = login(&mut auth, "admin", "admin123");
    let visible = maintenance.visible(&admin, None);
    let summary = dashboard_service::summary(&admin, &vehicles, &drivers, &visible);

    assert_eq!(summary.total_vehicles, 4);
    assert_eq!(summary.vehicles_in_service, 2);
    assert_eq!(summary.total_drivers, 3);
    // Todos los conductores sembrados están en servicio
    assert_eq!(summary.available_drivers, 0);

    let last = summary.last_service.unwrap();
    assert_eq!(last.date, "18/04/2024");
    assert_eq!(last.vehicle_plate, "ABC1234");
    assert_eq!(last.vehicle_model, "TRANSIT");
    assert_eq!(last.service_type, "Manutenção preventiva");

    // Un conductor ve el panel acotado a su vehículo
    let joao = login(&mut auth, "joao", "motorista123");
    let visible = maintenance.visible(&joao, None);
    let summary = dashboard_service::summary(&joao, &vehicles, &drivers, &visible);

    assert_eq!(summary.total_vehicles, 1);
    assert_eq!(summary.vehicles_in_service, 1);
    let last = summary.last_service.unwrap();
    assert_eq!(last.vehicle_plate, "SGF1525");
    assert_eq!(last.date, "05/04/2024");
}
