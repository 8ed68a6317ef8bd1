//! Servicio de autenticación
//!
//! Login simulado contra una tabla fija de credenciales en memoria.
//! No es un mecanismo de seguridad: el rol solo controla qué ve cada
//! usuario, sin hashing, tokens ni persistencia de sesión.

use chrono::Utc;
use log::{info, warn};

use crate::models::auth::{LoginRequest, Session, UserAccount};
use crate::utils::errors::{AppError, AppResult};

pub struct AuthService {
    accounts: Vec<UserAccount>,
    current_session: Option<Session>,
}

impl AuthService {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts,
            current_session: None,
        }
    }

    /// Autentica un usuario contra la tabla de credenciales
    ///
    /// Solo los pares exactos usuario/contraseña de la tabla son válidos;
    /// cualquier otro intento falla con `Unauthorized`.
    pub fn login(&mut self, request: &LoginRequest) -> AppResult<Session> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.username == request.username && a.password == request.password);

        match account {
            Some(account) => {
                let session = Session {
                    user_id: account.id.clone(),
                    username: account.username.clone(),
                    role: account.role,
                    vehicle_id: account.vehicle_id,
                    driver_id: account.driver_id,
                    created_at: Utc::now(),
                };
                info!("✅ Sesión iniciada: {} ({})", session.username, session.role.as_str());
                self.current_session = Some(session.clone());
                Ok(session)
            }
            None => {
                warn!("⚠️ Credenciales inválidas para '{}'", request.username);
                Err(AppError::Unauthorized("Invalid credentials".to_string()))
            }
        }
    }

    /// Cierra la sesión actual; nunca falla, incluso sin sesión activa
    pub fn logout(&mut self) {
        if let Some(session) = self.current_session.take() {
            info!("Sesión cerrada: {}", session.username);
        }
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current_session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session.is_some()
    }
}
