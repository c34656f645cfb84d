//! Carga inicial de vehículos desde un fichero JSON.
//!
//! Cada vehículo pasa por el controlador, así que las reglas de validación
//! se aplican igual que en un alta normal.

use crate::controllers::VehicleController;
use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppResult;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    pub loaded: usize,
    /// Matrícula y motivo de cada vehículo rechazado
    pub rejected: Vec<(String, String)>,
}

/// Lee un array JSON de vehículos. Errores de lectura o de formato abortan
/// la carga; los vehículos inválidos se omiten y se informan.
pub fn seed_from_file<R: VehicleRepository>(
    controller: &VehicleController<R>,
    path: &Path,
) -> AppResult<SeedReport> {
    info!("📂 Cargando vehículos desde {}", path.display());

    let file = File::open(path)?;
    let vehicles: Vec<Vehicle> = serde_json::from_reader(BufReader::new(file))?;

    Ok(seed_vehicles(controller, vehicles))
}

pub fn seed_vehicles<R: VehicleRepository>(
    controller: &VehicleController<R>,
    vehicles: impl IntoIterator<Item = Vehicle>,
) -> SeedReport {
    let mut report = SeedReport::default();

    for vehicle in vehicles {
        let id = vehicle.id.clone();
        match controller.upsert(vehicle) {
            Ok(_) => report.loaded += 1,
            Err(e) => {
                warn!("⚠️ Vehículo '{}' omitido en la carga: {}", id, e);
                report.rejected.push((id, e.message()));
            }
        }
    }

    info!(
        "✅ Carga terminada: {} cargados, {} rechazados",
        report.loaded,
        report.rejected.len()
    );
    report
}
