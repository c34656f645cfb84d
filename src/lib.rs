//! Registro de vehículos en memoria
//!
//! Alta, baja, consulta y listados de coches, motos y camiones con
//! validación de campos, más un validador independiente de tarjetas.

pub mod config;
pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use controllers::VehicleController;
pub use models::{FuelType, Vehicle, VehicleKind};
pub use repositories::{InMemoryVehicleRepository, VehicleRepository};
pub use utils::errors::{AppError, AppResult};
