//! Controlador de vehículos
//!
//! Valida las entradas, comprueba que haya resultados y delega en el
//! repositorio. El repositorio se inyecta en el constructor.

use crate::models::{FuelType, Vehicle, VehicleKind};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{
    bad_request_error, empty_collection_error, not_found_error, AppError, AppResult,
};
use crate::utils::validation::{
    validate_greater_than, validate_license_plate, validate_non_negative, validate_not_after,
    validate_not_empty, validate_positive,
};
use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, warn};

/// Fecha local de hoy
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct VehicleController<R: VehicleRepository> {
    repository: R,
    clock: fn() -> NaiveDate,
}

impl<R: VehicleRepository> VehicleController<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            clock: local_today,
        }
    }

    /// Sustituye el reloj usado para las reglas de fechas
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn list_all(&self) -> AppResult<Vec<Vehicle>> {
        self.ensure_not_empty()?;
        Ok(self.repository.list_all())
    }

    pub fn list_passed(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.repository.list_passed();
        if vehicles.is_empty() {
            return Err(empty_collection_error(
                "No hay vehículos que hayan pasado la revisión",
            ));
        }
        Ok(vehicles)
    }

    pub fn list_failed(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.repository.list_failed();
        if vehicles.is_empty() {
            return Err(empty_collection_error(
                "No hay vehículos que no hayan pasado la revisión",
            ));
        }
        Ok(vehicles)
    }

    pub fn list_by_type(&self, fuel_type: FuelType) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.repository.list_by_type(fuel_type);
        if vehicles.is_empty() {
            return Err(AppError::EmptyCollection(format!(
                "No hay ningún vehículo con combustible '{}'",
                fuel_type
            )));
        }
        Ok(vehicles)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Vehicle> {
        self.validate_id(id)?;
        self.ensure_not_empty()?;
        self.repository
            .find_by_id(id)
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    /// Valida el vehículo completo y lo inserta o reemplaza
    pub fn upsert(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        if let Err(e) = self.validate_vehicle(&vehicle) {
            warn!("❌ Vehículo '{}' rechazado: {}", vehicle.id, e);
            return Err(e);
        }
        Ok(self.repository.upsert(vehicle))
    }

    pub fn delete(&self, id: &str) -> AppResult<Vehicle> {
        self.ensure_not_empty()?;
        self.validate_id(id)?;
        self.repository.delete(id).ok_or_else(|| {
            warn!("❌ No se puede eliminar '{}': no existe", id);
            not_found_error("Vehicle", id)
        })
    }

    /// Comprueba las reglas en orden fijo; la primera que falla decide el error.
    pub fn validate_vehicle(&self, vehicle: &Vehicle) -> AppResult<()> {
        let today = (self.clock)();

        self.validate_id(&vehicle.id)?;

        validate_not_empty(&vehicle.model)
            .map_err(|_| bad_request_error("El modelo del vehículo no puede estar vacío"))?;

        validate_non_negative(vehicle.mileage).map_err(|_| {
            bad_request_error("Los kilómetros del vehículo deben ser como mínimo 0")
        })?;

        validate_not_after(vehicle.registration_year, today.year()).map_err(|_| {
            AppError::BadRequest(format!(
                "El año de matriculación no puede ser posterior al actual ({})",
                today.year()
            ))
        })?;

        validate_not_after(vehicle.last_inspection, today).map_err(|_| {
            AppError::BadRequest(format!(
                "La fecha de la última revisión no puede ser posterior a hoy ({})",
                today
            ))
        })?;

        match vehicle.kind {
            VehicleKind::Car { seats } => validate_greater_than(seats, 2)
                .map_err(|_| bad_request_error("Un coche debe tener como mínimo 3 plazas")),
            VehicleKind::Motorcycle { displacement } => validate_positive(displacement)
                .map_err(|_| bad_request_error("La cilindrada debe ser como mínimo 1")),
            VehicleKind::Truck { max_load } => validate_positive(max_load)
                .map_err(|_| bad_request_error("La capacidad máxima debe ser como mínimo 1")),
        }
    }

    pub fn validate_id(&self, id: &str) -> AppResult<()> {
        validate_not_empty(id)
            .map_err(|_| bad_request_error("La matrícula no puede estar vacía"))?;
        validate_license_plate(id).map_err(|_| {
            bad_request_error("La matrícula debe seguir el patrón adecuado, por ejemplo: \"AAAA-000\"")
        })
    }

    fn ensure_not_empty(&self) -> AppResult<()> {
        if self.repository.is_empty() {
            debug!("📭 Registro de vehículos vacío");
            return Err(empty_collection_error("No hay vehículos registrados"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryVehicleRepository;
    use assert_matches::assert_matches;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller() -> VehicleController<InMemoryVehicleRepository> {
        VehicleController::new(InMemoryVehicleRepository::new()).with_clock(fixed_today)
    }

    fn valid_car() -> Vehicle {
        Vehicle::car("AAAA-111", "Ibiza", FuelType::Gasoline, 5)
            .with_mileage(1_000)
            .with_registration_year(2020)
            .with_inspection(date(2024, 1, 15), true)
    }

    fn bad_request_message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_id() {
        let controller = controller();
        assert!(controller.validate_id("ABCD-123").is_ok());
        assert!(bad_request_message(controller.validate_id("")).contains("vacía"));
        assert!(bad_request_message(controller.validate_id("ABC-123")).contains("AAAA-000"));
        assert_matches!(controller.validate_id("abcd-123"), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn test_valid_vehicle_passes() {
        let controller = controller();
        assert!(controller.validate_vehicle(&valid_car()).is_ok());
        // límites inclusivos: año actual y revisión hoy
        let edge = valid_car()
            .with_registration_year(2024)
            .with_inspection(fixed_today(), false)
            .with_mileage(0);
        assert!(controller.validate_vehicle(&edge).is_ok());
    }

    #[test]
    fn test_rule_messages() {
        let controller = controller();

        let msg = bad_request_message(controller.validate_vehicle(&valid_car().with_model("")));
        assert!(msg.contains("modelo"));

        let msg = bad_request_message(controller.validate_vehicle(&valid_car().with_mileage(-1)));
        assert!(msg.contains("kilómetros"));

        let msg = bad_request_message(
            controller.validate_vehicle(&valid_car().with_registration_year(2025)),
        );
        assert!(msg.contains("matriculación"));
        assert!(msg.contains("2024"));

        let msg = bad_request_message(
            controller.validate_vehicle(&valid_car().with_inspection(date(2024, 5, 11), true)),
        );
        assert!(msg.contains("revisión"));
    }

    #[test]
    fn test_variant_rules() {
        let controller = controller();
        let base = valid_car();

        let two_seats = Vehicle { kind: VehicleKind::Car { seats: 2 }, ..base.clone() };
        assert!(bad_request_message(controller.validate_vehicle(&two_seats)).contains("plazas"));

        let no_engine = Vehicle { kind: VehicleKind::Motorcycle { displacement: 0 }, ..base.clone() };
        assert!(bad_request_message(controller.validate_vehicle(&no_engine)).contains("cilindrada"));

        let no_load = Vehicle { kind: VehicleKind::Truck { max_load: 0 }, ..base.clone() };
        assert!(bad_request_message(controller.validate_vehicle(&no_load)).contains("capacidad"));

        let ok_truck = Vehicle { kind: VehicleKind::Truck { max_load: 1 }, ..base };
        assert!(controller.validate_vehicle(&ok_truck).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let controller = controller();

        // matrícula y modelo inválidos: gana la matrícula
        let vehicle = Vehicle { id: "bad".to_string(), ..valid_car().with_model("") };
        assert!(bad_request_message(controller.validate_vehicle(&vehicle)).contains("matrícula"));

        // modelo vacío gana a todo lo demás
        let vehicle = Vehicle {
            kind: VehicleKind::Car { seats: 0 },
            ..valid_car()
                .with_model("")
                .with_mileage(-5)
                .with_registration_year(3000)
                .with_inspection(date(2099, 1, 1), true)
        };
        assert!(bad_request_message(controller.validate_vehicle(&vehicle)).contains("modelo"));

        // kilómetros antes que la regla de plazas
        let vehicle = Vehicle { kind: VehicleKind::Car { seats: 1 }, ..valid_car().with_mileage(-1) };
        assert!(bad_request_message(controller.validate_vehicle(&vehicle)).contains("kilómetros"));
    }

    #[test]
    fn test_empty_registry_errors() {
        let controller = controller();
        assert_matches!(controller.list_all(), Err(AppError::EmptyCollection(_)));
        assert_matches!(controller.list_passed(), Err(AppError::EmptyCollection(_)));
        assert_matches!(controller.list_failed(), Err(AppError::EmptyCollection(_)));
        assert_matches!(controller.list_by_type(FuelType::Diesel), Err(AppError::EmptyCollection(_)));
        assert_matches!(controller.find_by_id("AAAA-111"), Err(AppError::EmptyCollection(_)));
        assert_matches!(controller.delete("AAAA-111"), Err(AppError::EmptyCollection(_)));
    }

    #[test]
    fn test_find_by_id_checks_id_before_emptiness() {
        let controller = controller();
        assert_matches!(controller.find_by_id("nope"), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn test_delete_checks_emptiness_before_id() {
        let controller = controller();
        assert_matches!(controller.delete("nope"), Err(AppError::EmptyCollection(_)));

        controller.upsert(valid_car()).unwrap();
        assert_matches!(controller.delete("nope"), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn test_upsert_rejects_invalid_vehicle() {
        let controller = controller();
        assert_matches!(
            controller.upsert(valid_car().with_mileage(-10)),
            Err(AppError::BadRequest(_))
        );
        assert!(controller.repository().is_empty());
    }

    #[test]
    fn test_find_and_delete() {
        let controller = controller();
        controller.upsert(valid_car()).unwrap();

        assert_eq!(controller.find_by_id("AAAA-111").unwrap().model, "Ibiza");
        assert_matches!(controller.find_by_id("ZZZZ-999"), Err(AppError::NotFound(_)));

        let deleted = controller.delete("AAAA-111").unwrap();
        assert_eq!(deleted.id, "AAAA-111");
        assert!(controller.repository().is_empty());
    }

    #[test]
    fn test_list_by_type_message_names_fuel() {
        let controller = controller();
        controller.upsert(valid_car()).unwrap();
        match controller.list_by_type(FuelType::Electric) {
            Err(AppError::EmptyCollection(msg)) => assert!(msg.contains("electric")),
            other => panic!("expected EmptyCollection, got {:?}", other),
        }
        assert_eq!(controller.list_by_type(FuelType::Gasoline).unwrap().len(), 1);
    }
}
