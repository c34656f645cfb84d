//! Repositorio de vehículos
//!
//! Define el trait de almacenamiento y su implementación en memoria.
//! El orden de inserción se conserva para los listados.

use crate::models::{FuelType, Vehicle};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Operaciones de almacenamiento sobre vehículos, indexados por matrícula.
///
/// Ninguna operación valida datos: eso es responsabilidad del controlador.
pub trait VehicleRepository: Send + Sync {
    /// Todos los vehículos, en orden de inserción
    fn list_all(&self) -> Vec<Vehicle>;

    /// Vehículos cuya última revisión fue apta
    fn list_passed(&self) -> Vec<Vehicle>;

    /// Vehículos cuya última revisión no fue apta
    fn list_failed(&self) -> Vec<Vehicle>;

    /// Vehículos de un tipo de combustible
    fn list_by_type(&self, fuel_type: FuelType) -> Vec<Vehicle>;

    /// Primer vehículo con la matrícula dada
    fn find_by_id(&self, id: &str) -> Option<Vehicle>;

    /// Inserta el vehículo, o reemplaza el que tenga la misma matrícula.
    /// El vehículo guardado pasa al final del orden y se devuelve tal cual.
    fn upsert(&self, vehicle: Vehicle) -> Vehicle;

    /// Elimina y devuelve el vehículo con la matrícula dada
    fn delete(&self, id: &str) -> Option<Vehicle>;

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Implementación en memoria. Cada operación toma el lock una sola vez,
/// así el reemplazo de `upsert` es atómico para lectores concurrentes.
#[derive(Debug, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Mutex<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repositorio precargado. Las matrículas repetidas se resuelven como upsert.
    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let repository = Self::new();
        for vehicle in vehicles {
            repository.upsert(vehicle);
        }
        repository
    }

    fn filtered(&self, predicate: impl Fn(&Vehicle) -> bool) -> Vec<Vehicle> {
        self.vehicles
            .lock()
            .iter()
            .filter(|v| predicate(*v))
            .cloned()
            .collect()
    }
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn list_all(&self) -> Vec<Vehicle> {
        self.vehicles.lock().clone()
    }

    fn list_passed(&self) -> Vec<Vehicle> {
        self.filtered(|v| v.last_inspection_passed)
    }

    fn list_failed(&self) -> Vec<Vehicle> {
        self.filtered(|v| !v.last_inspection_passed)
    }

    fn list_by_type(&self, fuel_type: FuelType) -> Vec<Vehicle> {
        self.filtered(|v| v.fuel_type == fuel_type)
    }

    fn find_by_id(&self, id: &str) -> Option<Vehicle> {
        let vehicle = self.vehicles.lock().iter().find(|v| v.id == id).cloned();
        debug!("🔍 Búsqueda de vehículo '{}': {}", id, vehicle.is_some());
        vehicle
    }

    fn upsert(&self, vehicle: Vehicle) -> Vehicle {
        let mut vehicles = self.vehicles.lock();
        let replaced = match vehicles.iter().position(|v| v.id == vehicle.id) {
            Some(index) => {
                vehicles.remove(index);
                true
            }
            None => false,
        };
        vehicles.push(vehicle.clone());
        drop(vehicles);

        if replaced {
            info!("💾 Vehículo '{}' actualizado", vehicle.id);
        } else {
            info!("💾 Vehículo '{}' registrado", vehicle.id);
        }
        vehicle
    }

    fn delete(&self, id: &str) -> Option<Vehicle> {
        let mut vehicles = self.vehicles.lock();
        let index = vehicles.iter().position(|v| v.id == id)?;
        let removed = vehicles.remove(index);
        drop(vehicles);

        info!("🗑️ Vehículo '{}' eliminado", id);
        Some(removed)
    }

    fn len(&self) -> usize {
        self.vehicles.lock().len()
    }
}
