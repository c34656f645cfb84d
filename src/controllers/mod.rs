//! Controladores
//!
//! Capa de validación entre el llamador y los repositorios.

pub mod vehicle_controller;

pub use vehicle_controller::VehicleController;
