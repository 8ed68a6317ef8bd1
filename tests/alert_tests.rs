use chrono::NaiveDate;

use fleet_management::data;
use fleet_management::models::alert::{
    AlertFilters, AlertStatus, AlertStatusFilter, AlertType, CreateAlertRequest, ExpirationBucket,
};
use fleet_management::services::alert_service::{
    days_until_expiration, expiration_bucket, AlertService,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_days_until_expiration() {
    let today = date(2024, 12, 18);
    assert_eq!(days_until_expiration(date(2024, 12, 18), today), 0);
    assert_eq!(days_until_expiration(date(2024, 12, 20), today), 2);
    assert_eq!(days_until_expiration(date(2024, 12, 15), today), -3);
}

#[test]
fn test_bucket_scenarios() {
    // Vencida hace 3 días → expirada; en 2 días → crítica; en 10 días → normal
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(Vec::new());
    let today = date(2024, 12, 18);

    let cases = [
        (date(2024, 12, 15), ExpirationBucket::Expired),
        (date(2024, 12, 20), ExpirationBucket::Critical),
        (date(2024, 12, 28), ExpirationBucket::Normal),
    ];

    for (expires_at, expected) in cases {
        let alert = service
            .create(
                CreateAlertRequest {
                    vehicle_id: Some(vehicles[0].id),
                    alert_type: Some(AlertType::OilChange),
                    description: Some("Troca de óleo".to_string()),
                    expires_at: Some(expires_at),
                    ..Default::default()
                },
                &vehicles,
                today,
            )
            .unwrap();
        assert_eq!(expiration_bucket(&alert, today), expected);
    }
}

#[test]
fn test_bucket_boundaries() {
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(Vec::new());
    let today = date(2024, 12, 18);

    // 0 y 3 días → crítica; 4 y 7 → alerta; 8 → normal; -1 → expirada
    let cases = [
        (0i64, ExpirationBucket::Critical),
        (3, ExpirationBucket::Critical),
        (4, ExpirationBucket::Warning),
        (7, ExpirationBucket::Warning),
        (8, ExpirationBucket::Normal),
        (-1, ExpirationBucket::Expired),
    ];

    for (offset, expected) in cases {
        let alert = service
            .create(
                CreateAlertRequest {
                    vehicle_id: Some(vehicles[0].id),
                    alert_type: Some(AlertType::Battery),
                    description: Some("Verificação da bateria".to_string()),
                    expires_at: Some(today + chrono::Duration::days(offset)),
                    ..Default::default()
                },
                &vehicles,
                today,
            )
            .unwrap();
        assert_eq!(expiration_bucket(&alert, today), expected, "offset {}", offset);
    }
}

#[test]
fn test_completed_wins_over_expiry() {
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(Vec::new());
    let today = date(2024, 12, 18);

    let alert = service
        .create(
            CreateAlertRequest {
                vehicle_id: Some(vehicles[0].id),
                alert_type: Some(AlertType::Document),
                description: Some("Licenciamento".to_string()),
                expires_at: Some(date(2024, 12, 1)),
                ..Default::default()
            },
            &vehicles,
            today,
        )
        .unwrap();

    // Vencida mientras está pendiente
    assert_eq!(expiration_bucket(&alert, today), ExpirationBucket::Expired);

    let completed = service.complete(alert.id, today).unwrap().clone();
    assert_eq!(completed.status, AlertStatus::Completed);
    assert_eq!(completed.completed_at, Some(today));
    // Concluida gana aunque la fecha ya haya pasado
    assert_eq!(expiration_bucket(&completed, today), ExpirationBucket::Completed);
}

#[test]
fn test_expired_badge_count() {
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(data::seed_alerts(&vehicles));
    let today = date(2024, 12, 18);

    // Semilla: vencen 15/12 y 09/12 (ambas pendientes), el resto a futuro
    assert_eq!(service.expired_count(today), 2);

    // Agregar una alerta no relacionada no cambia el conteo
    let unrelated = service
        .create(
            CreateAlertRequest {
                vehicle_id: Some(vehicles[1].id),
                alert_type: Some(AlertType::Tire),
                description: Some("Rotação dos pneus".to_string()),
                expires_at: Some(date(2025, 1, 30)),
                ..Default::default()
            },
            &vehicles,
            today,
        )
        .unwrap();
    assert_eq!(service.expired_count(today), 2);

    // Quitarla tampoco
    service.delete(unrelated.id).unwrap();
    assert_eq!(service.expired_count(today), 2);

    // Concluir una vencida sí la saca de la insignia
    let expired_id = service
        .alerts()
        .iter()
        .find(|a| a.expires_at == date(2024, 12, 15))
        .unwrap()
        .id;
    service.complete(expired_id, today).unwrap();
    assert_eq!(service.expired_count(today), 1);
}

#[test]
fn test_create_requires_description_and_expiry() {
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(Vec::new());
    let today = date(2024, 12, 18);

    let missing_description = service.create(
        CreateAlertRequest {
            vehicle_id: Some(vehicles[0].id),
            alert_type: Some(AlertType::Battery),
            expires_at: Some(date(2024, 12, 30)),
            ..Default::default()
        },
        &vehicles,
        today,
    );
    assert!(missing_description.is_err());

    let missing_expiry = service.create(
        CreateAlertRequest {
            vehicle_id: Some(vehicles[0].id),
            alert_type: Some(AlertType::Battery),
            description: Some("Verificação da bateria".to_string()),
            ..Default::default()
        },
        &vehicles,
        today,
    );
    assert!(missing_expiry.is_err());

    assert!(service.alerts().is_empty());
}

#[test]
fn test_create_other_type_uses_custom_description() {
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(Vec::new());
    let today = date(2024, 12, 18);

    // Con tipo `Other`, la descripción estándar se ignora y manda la personalizada
    let rejected = service.create(
        CreateAlertRequest {
            vehicle_id: Some(vehicles[0].id),
            alert_type: Some(AlertType::Other),
            description: Some("descartada".to_string()),
            custom_description: None,
            expires_at: Some(date(2024, 12, 30)),
            ..Default::default()
        },
        &vehicles,
        today,
    );
    assert!(rejected.is_err());

    let accepted = service
        .create(
            CreateAlertRequest {
                vehicle_id: Some(vehicles[0].id),
                alert_type: Some(AlertType::Other),
                custom_description: Some("Polimento dos faróis".to_string()),
                expires_at: Some(date(2024, 12, 30)),
                ..Default::default()
            },
            &vehicles,
            today,
        )
        .unwrap();
    assert_eq!(accepted.description, "Polimento dos faróis");
}

#[test]
fn test_status_filter_expired_derives_from_date() {
    let vehicles = data::seed_vehicles();
    let service = AlertService::new(data::seed_alerts(&vehicles));
    let today = date(2024, 12, 18);

    // El filtro `Expired` selecciona las no concluidas con fecha pasada,
    // sin importar el estado almacenado
    let filters = AlertFilters {
        status: Some(AlertStatusFilter::Expired),
        ..Default::default()
    };
    let expired = service.filtered(&filters, &vehicles, today);
    assert_eq!(expired.len(), 2);
    assert!(expired
        .iter()
        .all(|a| a.status != AlertStatus::Completed && a.expires_at < today));

    // El filtro `Pending` excluye las vencidas
    let filters = AlertFilters {
        status: Some(AlertStatusFilter::Pending),
        ..Default::default()
    };
    let pending = service.filtered(&filters, &vehicles, today);
    assert_eq!(pending.len(), 3);
    assert!(pending.iter().all(|a| a.expires_at >= today));
}

#[test]
fn test_search_filter_matches_plate() {
    let vehicles = data::seed_vehicles();
    let service = AlertService::new(data::seed_alerts(&vehicles));
    let today = date(2024, 12, 18);

    let filters = AlertFilters {
        search: Some("sgf".to_string()),
        ..Default::default()
    };
    let results = service.filtered(&filters, &vehicles, today);
    assert_eq!(results.len(), 2);

    let filters = AlertFilters {
        search: Some("bateria".to_string()),
        ..Default::default()
    };
    let results = service.filtered(&filters, &vehicles, today);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_dangling_vehicle_reference_is_tolerated() {
    let vehicles = data::seed_vehicles();
    let mut service = AlertService::new(data::seed_alerts(&vehicles));
    let today = date(2024, 12, 18);

    // Simular la eliminación del vehículo: filtrar sin él no falla,
    // las alertas colgantes siguen contando para la insignia
    let remaining: Vec<_> = vehicles[1..].to_vec();
    let filters = AlertFilters::default();
    let all = service.filtered(&filters, &remaining, today);
    assert_eq!(all.len(), service.alerts().len());
    assert_eq!(service.expired_count(today), 2);

    // Pero crear una alerta nueva contra el vehículo inexistente sí falla
    let result = service.create(
        CreateAlertRequest {
            vehicle_id: Some(vehicles[0].id),
            alert_type: Some(AlertType::OilChange),
            description: Some("Troca de óleo".to_string()),
            expires_at: Some(date(2025, 1, 15)),
            ..Default::default()
        },
        &remaining,
        today,
    );
    assert!(result.is_err());
}
