//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, sus variantes (coche, moto,
//! camión) y el tipo de combustible usado para filtrar.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tipo de combustible del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Electric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Hybrid => "hybrid",
            FuelType::Electric => "electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Tipo de combustible desconocido: '{}'", s))
    }
}

/// Datos propios de cada tipo de vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleKind {
    Car { seats: i32 },
    Motorcycle { displacement: i32 },
    Truck { max_load: i32 },
}

impl VehicleKind {
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "car",
            VehicleKind::Motorcycle { .. } => "motorcycle",
            VehicleKind::Truck { .. } => "truck",
        }
    }
}

/// Vehículo registrado. La matrícula (`id`) es la clave única.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub fuel_type: FuelType,
    pub mileage: i64,
    pub registration_year: i32,
    pub last_inspection: NaiveDate,
    pub last_inspection_passed: bool,
    #[serde(flatten)]
    pub kind: VehicleKind,
}

impl Vehicle {
    /// Crea un vehículo sin kilómetros, matriculado este año y con la
    /// revisión aprobada hoy. Usar los `with_*` para el resto de campos.
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        fuel_type: FuelType,
        kind: VehicleKind,
    ) -> Self {
        let today = Local::now().date_naive();
        Self {
            id: id.into(),
            model: model.into(),
            fuel_type,
            mileage: 0,
            registration_year: today.year(),
            last_inspection: today,
            last_inspection_passed: true,
            kind,
        }
    }

    pub fn car(id: impl Into<String>, model: impl Into<String>, fuel_type: FuelType, seats: i32) -> Self {
        Self::new(id, model, fuel_type, VehicleKind::Car { seats })
    }

    pub fn motorcycle(
        id: impl Into<String>,
        model: impl Into<String>,
        fuel_type: FuelType,
        displacement: i32,
    ) -> Self {
        Self::new(id, model, fuel_type, VehicleKind::Motorcycle { displacement })
    }

    pub fn truck(id: impl Into<String>, model: impl Into<String>, fuel_type: FuelType, max_load: i32) -> Self {
        Self::new(id, model, fuel_type, VehicleKind::Truck { max_load })
    }

    pub fn with_mileage(mut self, mileage: i64) -> Self {
        self.mileage = mileage;
        self
    }

    pub fn with_registration_year(mut self, year: i32) -> Self {
        self.registration_year = year;
        self
    }

    pub fn with_inspection(mut self, date: NaiveDate, passed: bool) -> Self {
        self.last_inspection = date;
        self.last_inspection_passed = passed;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
