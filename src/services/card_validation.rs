//! Validación de tarjetas
//!
//! Funciones puras para número de tarjeta, fecha de caducidad y CSV.
//! No comparten estado con el registro de vehículos.

use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::validation::{validate_not_empty, validate_pattern, validate_range};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CARD_NUMBER_LENGTH: usize = 16;
pub const MIN_EXPIRY_YEAR: u32 = 2020;
pub const MAX_EXPIRY_YEAR: u32 = 2025;
pub const MAX_CSV: i64 = 499;

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").expect("digits regex must compile");
    static ref DATE_REGEX: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date regex must compile");
    static ref SIGNED_INTEGER_REGEX: Regex =
        Regex::new(r"^-?[0-9]+$").expect("integer regex must compile");
}

/// Datos de una tarjeta tal como llegan del usuario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub csv: String,
}

impl CardDetails {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        csv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            csv: csv.into(),
        }
    }

    /// Valida número, fecha y CSV, en ese orden
    pub fn validate(&self) -> AppResult<()> {
        validate_card_number(&self.card_number)?;
        validate_expiry_date(&self.expiry_date)?;
        validate_csv(&self.csv)
    }
}

pub fn validate_card_number(card_number: &str) -> AppResult<()> {
    validate_not_empty(card_number)
        .map_err(|_| bad_request_error("El número de tarjeta no puede estar vacío"))?;
    if card_number.starts_with('-') {
        return Err(bad_request_error("El número de tarjeta no puede ser negativo"));
    }
    validate_pattern(card_number, &DIGITS_REGEX, "digits")
        .map_err(|_| bad_request_error("El número de tarjeta no es un número"))?;
    if card_number.len() != CARD_NUMBER_LENGTH {
        return Err(bad_request_error("El número de tarjeta debe tener exactamente 16 dígitos"));
    }
    Ok(())
}

/// Fecha con formato AAAA-MM-DD. Los rangos se comprueban por componente,
/// sin validar el calendario (31 de febrero se acepta).
pub fn validate_expiry_date(date: &str) -> AppResult<()> {
    validate_pattern(date, &DATE_REGEX, "date")
        .map_err(|_| bad_request_error("La fecha no cumple con el patrón AAAA-MM-DD"))?;

    let mut parts = date.split('-').map(|part| part.parse::<u32>().unwrap_or_default());
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();

    if year < MIN_EXPIRY_YEAR || month < 1 || day < 1 {
        return Err(bad_request_error(
            "La fecha no puede tener un año menor que 2020, ni un mes o día menor que 01",
        ));
    }
    if year > MAX_EXPIRY_YEAR || month > 12 || day > 31 {
        return Err(bad_request_error(
            "La fecha no puede tener un año mayor que 2025, ni un mes mayor que 12, ni un día mayor que 31",
        ));
    }
    Ok(())
}

pub fn validate_csv(csv: &str) -> AppResult<()> {
    validate_pattern(csv, &SIGNED_INTEGER_REGEX, "integer")
        .map_err(|_| bad_request_error("El CSV no es un número"))?;

    let out_of_range = || bad_request_error("El CSV debe estar entre 0 y 499");
    let value = csv.parse::<i64>().map_err(|_| out_of_range())?;
    validate_range(value, 0, MAX_CSV).map_err(|_| out_of_range())
}

/// Suma de los cuatro grupos de 4 dígitos, módulo 499
pub fn compute_csv(card_number: &str) -> AppResult<u32> {
    validate_card_number(card_number)?;

    let sum: u32 = card_number
        .as_bytes()
        .chunks(4)
        .map(|group| {
            group
                .iter()
                .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'))
        })
        .sum();

    Ok(sum % (MAX_CSV as u32))
}
