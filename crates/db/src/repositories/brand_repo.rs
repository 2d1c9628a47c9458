//! Repository for the `brands` table.

use async_trait::async_trait;
use garage_core::types::DbId;
use sqlx::PgPool;

use crate::models::brand::Brand;

/// Column list for `brands` queries.
const COLUMNS: &str = "\
    id, vehicle_type_id, brand_name, description, \
    sort_order, is_active";

/// Data access for brands.
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Whether a brand with this id is stored.
    async fn exists(&self, id: DbId) -> anyhow::Result<bool>;

    /// Find a brand by id.
    async fn get_by_id(&self, id: DbId) -> anyhow::Result<Option<Brand>>;

    /// List all brands ordered by id.
    async fn get_all(&self) -> anyhow::Result<Vec<Brand>>;

    /// List the brands referencing a vehicle type, ordered by `sort_order`
    /// then id.
    async fn get_all_by_vehicle_type(&self, vehicle_type_id: DbId) -> anyhow::Result<Vec<Brand>>;

    /// Insert a brand, ignoring `record.id`.
    ///
    /// Returns the stored row with its assigned id, or `None` if nothing was
    /// inserted. An unknown `vehicle_type_id` fails with the store's foreign
    /// key error.
    async fn add(&self, record: &Brand) -> anyhow::Result<Option<Brand>>;

    /// Replace every column of the row `id` with `record`.
    ///
    /// Returns `true` if a row was updated.
    async fn update(&self, id: DbId, record: &Brand) -> anyhow::Result<bool>;

    /// Delete the row `id`.
    ///
    /// Returns `true` if a row was deleted. Callers check [`exists`] first.
    ///
    /// [`exists`]: BrandRepository::exists
    async fn delete(&self, id: DbId) -> anyhow::Result<bool>;
}

/// PostgreSQL-backed [`BrandRepository`].
#[derive(Clone)]
pub struct PgBrandRepo {
    pool: PgPool,
}

impl PgBrandRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepo {
    async fn exists(&self, id: DbId) -> anyhow::Result<bool> {
        let found =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(found)
    }

    async fn get_by_id(&self, id: DbId) -> anyhow::Result<Option<Brand>> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = $1");
        let row = sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Brand>> {
        let query = format!("SELECT {COLUMNS} FROM brands ORDER BY id");
        let rows = sqlx::query_as::<_, Brand>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_all_by_vehicle_type(&self, vehicle_type_id: DbId) -> anyhow::Result<Vec<Brand>> {
        let query = format!(
            "SELECT {COLUMNS} FROM brands \
             WHERE vehicle_type_id = $1 \
             ORDER BY sort_order NULLS LAST, id"
        );
        let rows = sqlx::query_as::<_, Brand>(&query)
            .bind(vehicle_type_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn add(&self, record: &Brand) -> anyhow::Result<Option<Brand>> {
        let query = format!(
            "INSERT INTO brands \
                 (vehicle_type_id, brand_name, description, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Brand>(&query)
            .bind(record.vehicle_type_id)
            .bind(&record.brand_name)
            .bind(&record.description)
            .bind(record.sort_order)
            .bind(record.is_active)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, record: &Brand) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE brands SET \
                 vehicle_type_id = $2, \
                 brand_name = $3, \
                 description = $4, \
                 sort_order = $5, \
                 is_active = $6 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(record.vehicle_type_id)
        .bind(&record.brand_name)
        .bind(&record.description)
        .bind(record.sort_order)
        .bind(record.is_active)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: DbId) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
