//! Utilidades del sistema

pub mod errors;
pub mod format;
pub mod validation;
