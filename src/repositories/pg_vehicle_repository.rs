//! Adaptador PostgreSQL del repositorio de vehículos
//!
//! Implementa `VehicleRepository` con SQLx. La búsqueda se arma con un
//! `QueryBuilder` a partir de la lista de predicados presentes.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::models::{
    vehicle::{Vehicle, VehicleAttributes},
    vehicle_id::VehicleId,
    vin::Vin,
};
use crate::repositories::vehicle_filter::{VehiclePredicate, VehicleSearch};
use crate::repositories::vehicle_record::{VehicleRecord, VEHICLE_COLUMNS};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column_sql: &str, value: &str) -> AppResult<Option<Vehicle>> {
        let sql = format!("SELECT {} FROM vehicles WHERE {} = $1", VEHICLE_COLUMNS, column_sql);
        let record = sqlx::query_as::<_, VehicleRecord>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        record.map(to_domain).transpose()
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn find_by_id(&self, id: &VehicleId) -> AppResult<Option<Vehicle>> {
        let sql = format!("SELECT {} FROM vehicles WHERE id = $1", VEHICLE_COLUMNS);
        let record = sqlx::query_as::<_, VehicleRecord>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        record.map(to_domain).transpose()
    }

    async fn find_by_vin(&self, vin: &Vin) -> AppResult<Option<Vehicle>> {
        self.find_one("vin", vin.value()).await
    }

    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> AppResult<Option<Vehicle>> {
        let wanted = registration_number.trim().to_uppercase();
        self.find_one("upper(registration_number)", &wanted).await
    }

    async fn search(&self, criteria: &VehicleSearch) -> AppResult<Vec<Vehicle>> {
        let predicates = criteria.predicates();
        debug!("🔍 Búsqueda de vehículos con {} filtros", predicates.len());

        let mut query = build_search_query(&predicates);
        let records = query
            .build_query_as::<VehicleRecord>()
            .fetch_all(&self.pool)
            .await?;

        records.into_iter().map(to_domain).collect()
    }

    async fn create(&self, attributes: &VehicleAttributes) -> AppResult<Vehicle> {
        let sql = format!(
            r#"
            INSERT INTO vehicles
                (vin, type, make, model, model_year, fuel_type, color, registration_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        );

        let record = sqlx::query_as::<_, VehicleRecord>(&sql)
            .bind(attributes.vin().value())
            .bind(attributes.vehicle_type().as_str())
            .bind(attributes.make())
            .bind(attributes.model())
            .bind(attributes.model_year())
            .bind(attributes.fuel_type().as_str())
            .bind(attributes.color())
            .bind(attributes.registration_number())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, attributes))?;

        to_domain(record)
    }

    async fn update(&self, id: &VehicleId, attributes: &VehicleAttributes) -> AppResult<Vehicle> {
        let sql = format!(
            r#"
            UPDATE vehicles
            SET vin = $2, type = $3, make = $4, model = $5, model_year = $6,
                fuel_type = $7, color = $8, registration_number = $9
            WHERE id = $1
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        );

        let record = sqlx::query_as::<_, VehicleRecord>(&sql)
            .bind(id.value())
            .bind(attributes.vin().value())
            .bind(attributes.vehicle_type().as_str())
            .bind(attributes.make())
            .bind(attributes.model())
            .bind(attributes.model_year())
            .bind(attributes.fuel_type().as_str())
            .bind(attributes.color())
            .bind(attributes.registration_number())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, attributes))?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        to_domain(record)
    }

    async fn delete(&self, id: &VehicleId) -> AppResult<()> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// SELECT con la conjunción de los predicados presentes
fn build_search_query(predicates: &[VehiclePredicate]) -> QueryBuilder<'static, Postgres> {
    let mut query =
        QueryBuilder::<Postgres>::new(format!("SELECT {} FROM vehicles", VEHICLE_COLUMNS));

    for (i, predicate) in predicates.iter().enumerate() {
        query.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate {
            VehiclePredicate::Make(make) => {
                query.push("lower(make) = ").push_bind(make.clone());
            }
            VehiclePredicate::Model(model) => {
                query.push("lower(model) = ").push_bind(model.clone());
            }
            VehiclePredicate::ModelYear(year) => {
                query.push("model_year = ").push_bind(*year);
            }
            VehiclePredicate::Type(vehicle_type) => {
                query.push("type = ").push_bind(vehicle_type.as_str());
            }
            VehiclePredicate::Fuel(fuel_type) => {
                query.push("fuel_type = ").push_bind(fuel_type.as_str());
            }
            VehiclePredicate::Vin(vin) => {
                query.push("vin = ").push_bind(vin.clone());
            }
            VehiclePredicate::RegistrationNumber(reg) => {
                query.push("upper(registration_number) = ").push_bind(reg.clone());
            }
        }
    }

    query.push(" ORDER BY id");
    query
}

fn to_domain(record: VehicleRecord) -> AppResult<Vehicle> {
    let id = record.id;
    record
        .into_domain()
        .map_err(|e| AppError::Internal(format!("Corrupt vehicle row {}: {}", id, e)))
}

/// Traduce violaciones de unicidad a `Conflict` con el campo afectado
fn map_write_error(error: sqlx::Error, attributes: &VehicleAttributes) -> AppError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let hint = db_error
                .constraint()
                .map(str::to_string)
                .unwrap_or_else(|| db_error.message().to_string());
            let (field, value) = conflict_field(&hint, attributes);
            return conflict_error("Vehicle", field, value);
        }
    }
    AppError::Database(error)
}

fn conflict_field<'a>(hint: &str, attributes: &'a VehicleAttributes) -> (&'static str, &'a str) {
    if hint.contains("registration") {
        ("registrationNumber", attributes.registration_number().unwrap_or_default())
    } else {
        ("vin", attributes.vin().value())
    }
}
