//! Utilidades de formato
//!
//! Helpers de presentación en formato brasileño (pt-BR) para fechas,
//! montos y duraciones de viaje.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Formatear fecha como dd/mm/aaaa
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formatear fecha y hora como dd/mm/aaaa hh:mm
pub fn format_datetime_br(datetime: DateTime<Utc>) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

/// Formatear un monto como moneda brasileña (R$ 1.850,00)
pub fn format_currency_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let as_text = format!("{:.2}", rounded);
    let (integer, fraction) = as_text.split_once('.').unwrap_or((as_text.as_str(), "00"));

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    // Separador de miles con punto, decimales con coma
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}R$ {},{}", sign, grouped, fraction)
}

/// Duración entre dos instantes en formato legible ("2h 15m" o "45 minutos")
pub fn format_trip_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let diff = end.signed_duration_since(start);
    let hours = diff.num_hours();
    let minutes = diff.num_minutes() - hours * 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{} minutos", minutes)
    }
}
