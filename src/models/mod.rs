//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del registro de vehículos.

pub mod vehicle;

pub use vehicle::{FuelType, Vehicle, VehicleKind};
