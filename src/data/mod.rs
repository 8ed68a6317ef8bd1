//! Datos de ejemplo
//!
//! Fixtures con los que arranca el sistema: flota, plantel, alertas,
//! servicios, fotos de itinerario legadas y la tabla fija de credenciales.
//! Todo vive en memoria; nada se persiste.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::alert::{Alert, AlertPriority, AlertStatus, AlertType};
use crate::models::auth::{UserAccount, UserRole};
use crate::models::driver::{Driver, DriverStatus};
use crate::models::infraction::Infraction;
use crate::models::itinerary::ItineraryPhoto;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::{Vehicle, VehiclePhotos, VehicleStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Los cuatro vehículos de ejemplo de la flota
pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: Uuid::new_v4(),
            plate: "SGF1525".to_string(),
            brand: "RENAULT".to_string(),
            model: "KANGOO".to_string(),
            status: VehicleStatus::InService,
            driver_name: "João Silva".to_string(),
            odometer: "100.654".to_string(),
            fuel_type: "Diesel".to_string(),
            year: 2021,
            color: "Preto".to_string(),
            acquired_at: date(2021, 1, 15),
            image_url: Some("https://picsum.photos/seed/renault-kangoo-van/300/200".to_string()),
            photos: VehiclePhotos::default(),
            documents: Vec::new(),
        },
        Vehicle {
            id: Uuid::new_v4(),
            plate: "ABC1234".to_string(),
            brand: "FORD".to_string(),
            model: "TRANSIT".to_string(),
            status: VehicleStatus::InService,
            driver_name: "Maria Santos".to_string(),
            odometer: "85.320".to_string(),
            fuel_type: "Diesel".to_string(),
            year: 2020,
            color: "Branco".to_string(),
            acquired_at: date(2020, 5, 10),
            image_url: Some("https://picsum.photos/seed/ford-transit-van/300/200".to_string()),
            photos: VehiclePhotos::default(),
            documents: Vec::new(),
        },
        Vehicle {
            id: Uuid::new_v4(),
            plate: "XYZ5678".to_string(),
            brand: "VOLKSWAGEN".to_string(),
            model: "SAVEIRO".to_string(),
            status: VehicleStatus::InMaintenance,
            driver_name: "Ana Costa".to_string(),
            odometer: "45.780".to_string(),
            fuel_type: "Gasolina".to_string(),
            year: 2022,
            color: "Prata".to_string(),
            acquired_at: date(2022, 3, 20),
            image_url: Some("https://picsum.photos/seed/volkswagen-saveiro/300/200".to_string()),
            photos: VehiclePhotos::default(),
            documents: Vec::new(),
        },
        Vehicle {
            id: Uuid::new_v4(),
            plate: "DEF9012".to_string(),
            brand: "MERCEDES-BENZ".to_string(),
            model: "SPRINTER".to_string(),
            status: VehicleStatus::OutOfService,
            driver_name: "-".to_string(),
            odometer: "150.200".to_string(),
            fuel_type: "Diesel".to_string(),
            year: 2019,
            color: "Azul".to_string(),
            acquired_at: date(2019, 8, 15),
            image_url: Some("https://picsum.photos/seed/mercedes-sprinter/300/200".to_string()),
            photos: VehiclePhotos::default(),
            documents: Vec::new(),
        },
    ]
}

/// Los tres conductores de ejemplo
pub fn seed_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: Uuid::new_v4(),
            name: "João Silva".to_string(),
            cpf: "123.456.789-00".to_string(),
            license_number: "123456789".to_string(),
            license_category: "B".to_string(),
            license_expiry: date(2025, 12, 31),
            birth_date: date(1985, 5, 15),
            phone: "(11) 99999-9999".to_string(),
            email: "joao@email.com".to_string(),
            address: "Rua das Flores, 123".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            postal_code: "01234-567".to_string(),
            assigned_vehicle: Some("SGF1525".to_string()),
            status: DriverStatus::InService,
            image_url: None,
        },
        Driver {
            id: Uuid::new_v4(),
            name: "Maria Santos".to_string(),
            cpf: "987.654.321-00".to_string(),
            license_number: "987654321".to_string(),
            license_category: "B".to_string(),
            license_expiry: date(2024, 6, 30),
            birth_date: date(1990, 8, 20),
            phone: "(11) 88888-8888".to_string(),
            email: "maria@email.com".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            postal_code: "01310-100".to_string(),
            assigned_vehicle: Some("ABC1234".to_string()),
            status: DriverStatus::InService,
            image_url: None,
        },
        Driver {
            id: Uuid::new_v4(),
            name: "Ana Costa".to_string(),
            cpf: "456.789.123-00".to_string(),
            license_number: "456789123".to_string(),
            license_category: "B".to_string(),
            license_expiry: date(2023, 9, 15),
            birth_date: date(1988, 12, 10),
            phone: "(21) 77777-7777".to_string(),
            email: "ana@email.com".to_string(),
            address: "Rua do Ouvidor, 50".to_string(),
            city: "Rio de Janeiro".to_string(),
            state: "RJ".to_string(),
            postal_code: "20040-030".to_string(),
            assigned_vehicle: Some("XYZ5678".to_string()),
            status: DriverStatus::InService,
            image_url: None,
        },
    ]
}

/// Las cinco alertas de ejemplo, referidas a los vehículos sembrados
pub fn seed_alerts(vehicles: &[Vehicle]) -> Vec<Alert> {
    let vehicle = |plate: &str| {
        vehicles
            .iter()
            .find(|v| v.plate == plate)
            .map(|v| v.id)
            .unwrap_or_default()
    };

    vec![
        Alert {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("SGF1525"),
            alert_type: AlertType::OilChange,
            description: "Troca de óleo do motor".to_string(),
            created_at: date(2024, 12, 1),
            expires_at: date(2024, 12, 15),
            completed_at: None,
            priority: AlertPriority::High,
            status: AlertStatus::Expired,
            notes: Some("Óleo precisa ser trocado urgentemente".to_string()),
        },
        Alert {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("SGF1525"),
            alert_type: AlertType::Battery,
            description: "Verificação da bateria".to_string(),
            created_at: date(2024, 12, 5),
            expires_at: date(2024, 12, 20),
            completed_at: None,
            priority: AlertPriority::Medium,
            status: AlertStatus::Pending,
            notes: Some("Bateria com 2 anos de uso".to_string()),
        },
        Alert {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("ABC1234"),
            alert_type: AlertType::Tire,
            description: "Rotação dos pneus".to_string(),
            created_at: date(2024, 12, 10),
            expires_at: date(2024, 12, 25),
            completed_at: None,
            priority: AlertPriority::Medium,
            status: AlertStatus::Pending,
            notes: None,
        },
        Alert {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("XYZ5678"),
            alert_type: AlertType::Inspection,
            description: "Revisão geral 45.000 km".to_string(),
            created_at: date(2024, 12, 8),
            expires_at: date(2024, 12, 22),
            completed_at: None,
            priority: AlertPriority::High,
            status: AlertStatus::Pending,
            notes: None,
        },
        Alert {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("DEF9012"),
            alert_type: AlertType::Document,
            description: "Vencimento do licenciamento".to_string(),
            created_at: date(2024, 12, 3),
            expires_at: date(2024, 12, 9),
            completed_at: None,
            priority: AlertPriority::High,
            status: AlertStatus::Expired,
            notes: Some("Licenciamento vence hoje".to_string()),
        },
    ]
}

/// Los cinco servicios de mantenimiento de ejemplo
pub fn seed_maintenance(vehicles: &[Vehicle]) -> Vec<MaintenanceRecord> {
    let vehicle = |plate: &str| {
        vehicles
            .iter()
            .find(|v| v.plate == plate)
            .map(|v| v.id)
            .unwrap_or_default()
    };

    vec![
        MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("SGF1525"),
            vehicle_plate: "SGF1525".to_string(),
            service_type: "Troca de óleo".to_string(),
            description: "Troca de óleo do motor e filtro".to_string(),
            location: "Oficina Central - São Paulo".to_string(),
            date: date(2024, 1, 15),
            cost: Decimal::new(35000, 2),
            technician: "Carlos Silva".to_string(),
            attachment: Some("https://picsum.photos/seed/manutencao1/400/300".to_string()),
            notes: Some("Veículo apresentou bom desempenho após a manutenção".to_string()),
        },
        MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("SGF1525"),
            vehicle_plate: "SGF1525".to_string(),
            service_type: "Revisão dos freios".to_string(),
            description: "Substituição das pastilhas de freio dianteiras".to_string(),
            location: "Oficina Express - Campinas".to_string(),
            date: date(2024, 2, 20),
            cost: Decimal::new(62000, 2),
            technician: "Ana Santos".to_string(),
            attachment: Some("https://picsum.photos/seed/manutencao2/400/300".to_string()),
            notes: Some("Freios substituídos com sucesso".to_string()),
        },
        MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("ABC1234"),
            vehicle_plate: "ABC1234".to_string(),
            service_type: "Alinhamento e balanceamento".to_string(),
            description: "Alinhamento 3D e balanceamento das rodas".to_string(),
            location: "Centro Automotivo - Rio de Janeiro".to_string(),
            date: date(2024, 3, 10),
            cost: Decimal::new(28000, 2),
            technician: "Roberto Alves".to_string(),
            attachment: None,
            notes: Some("Veículo alinhado conforme especificações do fabricante".to_string()),
        },
        MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("SGF1525"),
            vehicle_plate: "SGF1525".to_string(),
            service_type: "Troca de pneus".to_string(),
            description: "Substituição dos 4 pneus".to_string(),
            location: "Pneus & Cia - São Paulo".to_string(),
            date: date(2024, 4, 5),
            cost: Decimal::new(185000, 2),
            technician: "Miguel Costa".to_string(),
            attachment: None,
            notes: Some("Agendado para próxima semana".to_string()),
        },
        MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle("ABC1234"),
            vehicle_plate: "ABC1234".to_string(),
            service_type: "Manutenção preventiva".to_string(),
            description: "Revisão completa do veículo".to_string(),
            location: "Oficina Master - Belo Horizonte".to_string(),
            date: date(2024, 4, 18),
            cost: Decimal::new(120000, 2),
            technician: "Paula Rodrigues".to_string(),
            attachment: None,
            notes: Some("Aguardando peças".to_string()),
        },
    ]
}

/// Fotos de panel legadas: sin `itinerary_id` ni posición, se agrupan
/// por la heurística temporal
pub fn seed_itinerary_photos(vehicles: &[Vehicle], drivers: &[Driver]) -> Vec<ItineraryPhoto> {
    let kangoo = vehicles
        .iter()
        .find(|v| v.plate == "SGF1525")
        .map(|v| v.id)
        .unwrap_or_default();
    let joao = drivers.iter().find(|d| d.name == "João Silva").map(|d| d.id);

    let timestamp = |hour: u32, minute: u32| {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0).unwrap()
    };

    vec![
        ItineraryPhoto {
            id: Uuid::new_v4(),
            vehicle_id: kangoo,
            driver_id: joao,
            photo_url: "https://picsum.photos/seed/painel1/400/300".to_string(),
            timestamp: timestamp(8, 30),
            odometer: Some("102.345 km".to_string()),
            notes: Some("Início do turno".to_string()),
            driver_name: None,
            itinerary_id: None,
            position: None,
            destination_address: None,
        },
        ItineraryPhoto {
            id: Uuid::new_v4(),
            vehicle_id: kangoo,
            driver_id: joao,
            photo_url: "https://picsum.photos/seed/painel2/400/300".to_string(),
            timestamp: timestamp(12, 45),
            odometer: Some("102.678 km".to_string()),
            notes: Some("Almoço".to_string()),
            driver_name: None,
            itinerary_id: None,
            position: None,
            destination_address: None,
        },
        ItineraryPhoto {
            id: Uuid::new_v4(),
            vehicle_id: kangoo,
            driver_id: joao,
            photo_url: "https://picsum.photos/seed/painel3/400/300".to_string(),
            timestamp: timestamp(17, 15),
            odometer: Some("103.012 km".to_string()),
            notes: Some("Fim do turno".to_string()),
            driver_name: None,
            itinerary_id: None,
            position: None,
            destination_address: None,
        },
    ]
}

/// Sin infracciones sembradas; el registro arranca vacío
pub fn seed_infractions() -> Vec<Infraction> {
    Vec::new()
}

/// Tabla fija de credenciales: exactamente tres pares válidos
pub fn seed_accounts(vehicles: &[Vehicle], drivers: &[Driver]) -> Vec<UserAccount> {
    let vehicle = |plate: &str| vehicles.iter().find(|v| v.plate == plate).map(|v| v.id);
    let driver = |name: &str| drivers.iter().find(|d| d.name == name).map(|d| d.id);

    vec![
        UserAccount {
            id: "user_admin_001".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: UserRole::Admin,
            vehicle_id: None,
            driver_id: None,
        },
        UserAccount {
            id: "user_driver_001".to_string(),
            username: "joao".to_string(),
            password: "motorista123".to_string(),
            role: UserRole::Driver,
            vehicle_id: vehicle("SGF1525"),
            driver_id: driver("João Silva"),
        },
        UserAccount {
            id: "user_driver_002".to_string(),
            username: "maria".to_string(),
            password: "motorista123".to_string(),
            role: UserRole::Driver,
            vehicle_id: vehicle("ABC1234"),
            driver_id: driver("Maria Santos"),
        },
    ]
}
