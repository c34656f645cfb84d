//! Services module
//!
//! Lógica que no pertenece al controlador: la validación de tarjetas
//! (independiente del registro) y la carga inicial de vehículos.

pub mod card_validation;
pub mod seed_service;

pub use card_validation::*;
pub use seed_service::{seed_from_file, seed_vehicles, SeedReport};
