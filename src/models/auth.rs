//! Modelos de autenticación
//!
//! Cuentas, credenciales y sesión. La autenticación es simulada:
//! las credenciales viven en una tabla fija en memoria.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Driver,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Driver => "driver",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "driver" => Some(UserRole::Driver),
            _ => None,
        }
    }
}

/// Cuenta de usuario de la tabla de credenciales en memoria
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
}

/// Request de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Sesión del usuario autenticado
///
/// Se pasa explícitamente a cada operación que filtra por rol;
/// no existe estado global de sesión fuera del AuthService.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: UserRole,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_driver(&self) -> bool {
        self.role == UserRole::Driver
    }
}
