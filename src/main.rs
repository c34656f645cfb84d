use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use vehicle_registry::config::EnvironmentConfig;
use vehicle_registry::services::seed_from_file;
use vehicle_registry::{FuelType, InMemoryVehicleRepository, VehicleController};

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Registro de vehículos ({})", config.environment);
    info!("================================================");

    let controller = VehicleController::new(InMemoryVehicleRepository::new());

    if let Some(path) = &config.seed_file {
        let report = match seed_from_file(&controller, path) {
            Ok(report) => report,
            Err(e) => {
                error!("❌ Error cargando {}: {}", path.display(), e);
                return Err(anyhow::anyhow!("Error de carga: {}", e));
            }
        };
        for (id, reason) in &report.rejected {
            info!("   omitido {}: {}", id, reason);
        }
    }

    match controller.list_all() {
        Ok(vehicles) => info!("📋 Vehículos registrados: {}", vehicles.len()),
        Err(e) => {
            info!("📭 {}", e.message());
            return Ok(());
        }
    }

    let passed = controller.list_passed().map(|v| v.len()).unwrap_or(0);
    let failed = controller.list_failed().map(|v| v.len()).unwrap_or(0);
    info!("✅ Revisión apta: {}  ❌ No apta: {}", passed, failed);

    for fuel_type in FuelType::ALL {
        if let Ok(vehicles) = controller.list_by_type(fuel_type) {
            info!("⛽ {}: {}", fuel_type, vehicles.len());
        }
    }

    Ok(())
}
