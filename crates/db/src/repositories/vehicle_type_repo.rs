//! Repository for the `vehicle_types` table.

use async_trait::async_trait;
use garage_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle_type::VehicleType;

/// Column list for `vehicle_types` queries.
const COLUMNS: &str = "id, type_name, description, is_active";

/// Data access for vehicle types.
#[async_trait]
pub trait VehicleTypeRepository: Send + Sync {
    /// Whether a vehicle type with this id is stored.
    async fn exists(&self, id: DbId) -> anyhow::Result<bool>;

    /// Find a vehicle type by id.
    async fn get_by_id(&self, id: DbId) -> anyhow::Result<Option<VehicleType>>;

    /// List all vehicle types ordered by id.
    async fn get_all(&self) -> anyhow::Result<Vec<VehicleType>>;

    /// Insert a vehicle type, ignoring `record.id`.
    ///
    /// Returns the stored row with its assigned id, or `None` if nothing was
    /// inserted.
    async fn add(&self, record: &VehicleType) -> anyhow::Result<Option<VehicleType>>;

    /// Replace every column of the row `id` with `record`.
    ///
    /// Returns `true` if a row was updated.
    async fn update(&self, id: DbId, record: &VehicleType) -> anyhow::Result<bool>;
}

/// PostgreSQL-backed [`VehicleTypeRepository`].
#[derive(Clone)]
pub struct PgVehicleTypeRepo {
    pool: PgPool,
}

impl PgVehicleTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleTypeRepository for PgVehicleTypeRepo {
    async fn exists(&self, id: DbId) -> anyhow::Result<bool> {
        let found = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM vehicle_types WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(found)
    }

    async fn get_by_id(&self, id: DbId) -> anyhow::Result<Option<VehicleType>> {
        let query = format!("SELECT {COLUMNS} FROM vehicle_types WHERE id = $1");
        let row = sqlx::query_as::<_, VehicleType>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<VehicleType>> {
        let query = format!("SELECT {COLUMNS} FROM vehicle_types ORDER BY id");
        let rows = sqlx::query_as::<_, VehicleType>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn add(&self, record: &VehicleType) -> anyhow::Result<Option<VehicleType>> {
        let query = format!(
            "INSERT INTO vehicle_types (type_name, description, is_active) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, VehicleType>(&query)
            .bind(&record.type_name)
            .bind(&record.description)
            .bind(record.is_active)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, record: &VehicleType) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE vehicle_types SET \
                 type_name = $2, \
                 description = $3, \
                 is_active = $4 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&record.type_name)
        .bind(&record.description)
        .bind(record.is_active)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
