use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use fleet_management::data;
use fleet_management::models::auth::{Session, UserRole};
use fleet_management::models::maintenance::MaintenanceRequest;
use fleet_management::services::maintenance_service::MaintenanceService;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn admin_session() -> Session {
    Session {
        user_id: "user_admin_001".to_string(),
        username: "admin".to_string(),
        role: UserRole::Admin,
        vehicle_id: None,
        driver_id: None,
        created_at: Utc::now(),
    }
}

fn driver_session(vehicle_id: Uuid) -> Session {
    Session {
        user_id: "user_driver_001".to_string(),
        username: "joao".to_string(),
        role: UserRole::Driver,
        vehicle_id: Some(vehicle_id),
        driver_id: Some(Uuid::new_v4()),
        created_at: Utc::now(),
    }
}

fn request(vehicle_id: Uuid, service_date: NaiveDate, cost: &str) -> MaintenanceRequest {
    MaintenanceRequest {
        vehicle_id: Some(vehicle_id),
        service_type: Some("Troca de óleo".to_string()),
        description: Some("Troca de óleo do motor e filtro".to_string()),
        location: Some("Oficina Central - São Paulo".to_string()),
        date: Some(service_date),
        cost: Some(cost.parse().unwrap()),
        technician: Some("Carlos Silva".to_string()),
        attachment: None,
        notes: None,
    }
}

#[test]
fn test_records_stay_sorted_by_date_desc() {
    let vehicles = data::seed_vehicles();
    let mut service = MaintenanceService::new(data::seed_maintenance(&vehicles));

    // La semilla ya queda ordenada al construir el servicio
    let dates: Vec<_> = service.records().iter().map(|r| r.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    // Insertar en el medio y al principio mantiene el orden
    service
        .create(request(vehicles[0].id, date(2024, 3, 1), "150.00"), &vehicles)
        .unwrap();
    service
        .create(request(vehicles[0].id, date(2024, 6, 1), "150.00"), &vehicles)
        .unwrap();

    let dates: Vec<_> = service.records().iter().map(|r| r.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(service.records()[0].date, date(2024, 6, 1));
}

#[test]
fn test_update_date_reorders_list() {
    let vehicles = data::seed_vehicles();
    let mut service = MaintenanceService::new(data::seed_maintenance(&vehicles));

    // Mover el registro más antiguo al frente cambiándole la fecha
    let oldest_id = service.records().last().unwrap().id;
    service
        .update(oldest_id, request(vehicles[0].id, date(2024, 12, 1), "350.00"), &vehicles)
        .unwrap();

    assert_eq!(service.records()[0].id, oldest_id);
}

#[test]
fn test_cost_zero_is_rejected_with_field_error() {
    let vehicles = data::seed_vehicles();
    let mut service = MaintenanceService::new(Vec::new());

    let error = service
        .create(request(vehicles[0].id, date(2024, 5, 1), "0"), &vehicles)
        .unwrap_err();
    assert!(error.has_field_error("cost"));

    let error = service
        .create(request(vehicles[0].id, date(2024, 5, 1), "-10.00"), &vehicles)
        .unwrap_err();
    assert!(error.has_field_error("cost"));

    // Un costo positivo con centavos pasa
    let record = service
        .create(request(vehicles[0].id, date(2024, 5, 1), "350.00"), &vehicles)
        .unwrap();
    assert_eq!(record.cost, Decimal::new(35000, 2));
}

#[test]
fn test_validation_collects_all_missing_fields() {
    let vehicles = data::seed_vehicles();
    let mut service = MaintenanceService::new(Vec::new());

    let error = service
        .create(MaintenanceRequest::default(), &vehicles)
        .unwrap_err();

    for field in ["vehicle_id", "service_type", "description", "location", "date", "cost", "technician"] {
        assert!(error.has_field_error(field), "missing error for {}", field);
    }
    assert!(service.records().is_empty());
}

#[test]
fn test_search_is_case_insensitive() {
    let vehicles = data::seed_vehicles();
    let service = MaintenanceService::new(data::seed_maintenance(&vehicles));
    let admin = admin_session();

    // Por matrícula
    assert_eq!(service.visible(&admin, Some("sgf")).len(), 3);
    // Por tipo de servicio
    assert_eq!(service.visible(&admin, Some("ÓLEO")).len(), 1);
    // Por técnico
    assert_eq!(service.visible(&admin, Some("paula")).len(), 1);
    // Término vacío no filtra
    assert_eq!(service.visible(&admin, Some("")).len(), 5);
    assert_eq!(service.visible(&admin, None).len(), 5);
}

#[test]
fn test_driver_sees_only_own_vehicle_records() {
    let vehicles = data::seed_vehicles();
    let service = MaintenanceService::new(data::seed_maintenance(&vehicles));
    let kangoo = vehicles.iter().find(|v| v.plate == "SGF1525").unwrap();
    let session = driver_session(kangoo.id);

    let visible = service.visible(&session, None);
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|r| r.vehicle_id == kangoo.id));

    // El costo total también respeta la restricción
    let expected: Decimal = "2820.00".parse().unwrap();
    assert_eq!(service.total_cost(&session, None), expected);
}

#[test]
fn test_total_cost_sums_visible_set() {
    let vehicles = data::seed_vehicles();
    let service = MaintenanceService::new(data::seed_maintenance(&vehicles));
    let admin = admin_session();

    let expected: Decimal = "4300.00".parse().unwrap();
    assert_eq!(service.total_cost(&admin, None), expected);

    // Con búsqueda, suma solo lo filtrado
    let filtered: Decimal = "350.00".parse().unwrap();
    assert_eq!(service.total_cost(&admin, Some("óleo")), filtered);
}

#[test]
fn test_last_service_is_most_recent_visible() {
    let vehicles = data::seed_vehicles();
    let service = MaintenanceService::new(data::seed_maintenance(&vehicles));

    let admin = admin_session();
    assert_eq!(service.last_service(&admin).unwrap().date, date(2024, 4, 18));

    let kangoo = vehicles.iter().find(|v| v.plate == "SGF1525").unwrap();
    let session = driver_session(kangoo.id);
    assert_eq!(service.last_service(&session).unwrap().date, date(2024, 4, 5));
}

#[test]
fn test_plate_snapshot_survives_vehicle_rename() {
    let mut vehicles = data::seed_vehicles();
    let mut service = MaintenanceService::new(Vec::new());
    let vehicle_id = vehicles[0].id;

    let record = service
        .create(request(vehicle_id, date(2024, 5, 1), "350.00"), &vehicles)
        .unwrap();
    assert_eq!(record.vehicle_plate, "SGF1525");

    // Cambiar la matrícula del vehículo no reescribe el registro
    vehicles[0].plate = "NOVA999".to_string();
    assert_eq!(service.records()[0].vehicle_plate, "SGF1525");
}

#[test]
fn test_delete_unknown_record_fails() {
    let vehicles = data::seed_vehicles();
    let mut service = MaintenanceService::new(data::seed_maintenance(&vehicles));

    assert!(service.delete(Uuid::new_v4()).is_err());
    assert_eq!(service.records().len(), 5);

    let id = service.records()[0].id;
    service.delete(id).unwrap();
    assert_eq!(service.records().len(), 4);
}
