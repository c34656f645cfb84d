//! Repositorios
//!
//! Acceso a los datos de vehículos.

pub mod vehicle_repository;

pub use vehicle_repository::{InMemoryVehicleRepository, VehicleRepository};
