//! Handlers for brands.
//!
//! Brands reference a vehicle type, so [`BrandHandler`] also holds the
//! vehicle type repository for reference checks.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use garage_core::types::{DbId, UNASSIGNED_ID};
use garage_db::models::brand::{Brand, UpdateBrand};
use garage_db::repositories::{BrandRepository, VehicleTypeRepository};

use super::{
    DATA_NOT_FOUND, DELETED, DELETE_TARGET_MISSING, ID_NOT_FOUND, UPDATED, VEHICLE_TYPE_NOT_FOUND,
};
use crate::error::AppResult;
use crate::outcome::Outcome;
use crate::state::AppState;

/// Orchestrates brand operations.
#[derive(Clone)]
pub struct BrandHandler {
    brands: Arc<dyn BrandRepository>,
    vehicle_types: Arc<dyn VehicleTypeRepository>,
}

impl BrandHandler {
    pub fn new(
        brands: Arc<dyn BrandRepository>,
        vehicle_types: Arc<dyn VehicleTypeRepository>,
    ) -> Self {
        Self {
            brands,
            vehicle_types,
        }
    }

    /// Insert a new brand. Any client-supplied id is discarded.
    ///
    /// The vehicle type reference is left to the store's foreign key; a
    /// violation comes back as `Error`.
    pub async fn create(&self, input: Option<Brand>) -> Outcome<Brand> {
        let Some(mut record) = input else {
            return Outcome::Invalid(None);
        };
        record.id = UNASSIGNED_ID;

        match self.brands.add(&record).await {
            Ok(Some(stored)) => {
                tracing::info!(
                    brand_id = stored.id,
                    vehicle_type_id = stored.vehicle_type_id,
                    "Brand created",
                );
                Outcome::Success(stored)
            }
            Ok(None) => {
                tracing::warn!("Brand insert failed: no row stored");
                Outcome::NotFound
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create brand");
                Outcome::failed(err)
            }
        }
    }

    /// Reconcile `patch` into the stored brand `id` and persist it.
    pub async fn update(&self, id: DbId, patch: &UpdateBrand) -> Outcome<&'static str> {
        self.try_update(id, patch).await.unwrap_or_else(|err| {
            tracing::error!(brand_id = id, error = %err, "Failed to update brand");
            Outcome::failed(err)
        })
    }

    async fn try_update(&self, id: DbId, patch: &UpdateBrand) -> anyhow::Result<Outcome<&'static str>> {
        let Some(existing) = self.brands.get_by_id(id).await? else {
            return Ok(Outcome::Invalid(Some(ID_NOT_FOUND)));
        };

        let merged = existing.reconcile(patch);
        if !merged.accepted {
            tracing::warn!(
                brand_id = id,
                patch_id = ?patch.id,
                "Brand patch id does not match target",
            );
            return Ok(Outcome::Invalid(None));
        }

        // A changed reference must point at a stored vehicle type.
        if merged.record.vehicle_type_id != existing.vehicle_type_id
            && !self.vehicle_types.exists(merged.record.vehicle_type_id).await?
        {
            return Ok(Outcome::Invalid(Some(VEHICLE_TYPE_NOT_FOUND)));
        }

        if !self.brands.update(id, &merged.record).await? {
            return Ok(Outcome::Invalid(None));
        }

        tracing::info!(brand_id = id, "Brand updated");
        Ok(Outcome::Success(UPDATED))
    }

    /// List every brand. An empty store is reported as `Invalid`.
    pub async fn list(&self) -> Outcome<Vec<Brand>> {
        match self.brands.get_all().await {
            Ok(rows) if rows.is_empty() => Outcome::Invalid(Some(DATA_NOT_FOUND)),
            Ok(rows) => Outcome::Success(rows),
            Err(err) => {
                tracing::error!(error = %err, "Failed to list brands");
                Outcome::failed(err)
            }
        }
    }

    /// List the brands of one vehicle type.
    pub async fn list_by_vehicle_type(&self, vehicle_type_id: DbId) -> Outcome<Vec<Brand>> {
        self.try_list_by_vehicle_type(vehicle_type_id)
            .await
            .unwrap_or_else(|err| {
                tracing::error!(vehicle_type_id, error = %err, "Failed to list brands by vehicle type");
                Outcome::failed(err)
            })
    }

    async fn try_list_by_vehicle_type(
        &self,
        vehicle_type_id: DbId,
    ) -> anyhow::Result<Outcome<Vec<Brand>>> {
        if !self.vehicle_types.exists(vehicle_type_id).await? {
            return Ok(Outcome::Invalid(Some(ID_NOT_FOUND)));
        }

        let rows = self.brands.get_all_by_vehicle_type(vehicle_type_id).await?;
        if rows.is_empty() {
            return Ok(Outcome::Invalid(Some(DATA_NOT_FOUND)));
        }
        Ok(Outcome::Success(rows))
    }

    /// Fetch a single brand.
    pub async fn get(&self, id: DbId) -> Outcome<Brand> {
        match self.brands.get_by_id(id).await {
            Ok(Some(row)) => Outcome::Success(row),
            Ok(None) => Outcome::NotFound,
            Err(err) => {
                tracing::error!(brand_id = id, error = %err, "Failed to load brand");
                Outcome::failed(err)
            }
        }
    }

    /// Delete the brand `id` after confirming it exists.
    pub async fn delete(&self, id: DbId) -> Outcome<&'static str> {
        self.try_delete(id).await.unwrap_or_else(|err| {
            tracing::error!(brand_id = id, error = %err, "Failed to delete brand");
            Outcome::failed(err)
        })
    }

    async fn try_delete(&self, id: DbId) -> anyhow::Result<Outcome<&'static str>> {
        if !self.brands.exists(id).await? {
            return Ok(Outcome::Invalid(Some(DELETE_TARGET_MISSING)));
        }

        self.brands.delete(id).await?;
        tracing::info!(brand_id = id, "Brand deleted");
        Ok(Outcome::Success(DELETED))
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/brands
pub async fn list_brands(State(state): State<AppState>) -> Outcome<Vec<Brand>> {
    state.brands.list().await
}

/// GET /api/v1/vehicle-types/{id}/brands
pub async fn list_brands_by_vehicle_type(
    State(state): State<AppState>,
    Path(vehicle_type_id): Path<DbId>,
) -> Outcome<Vec<Brand>> {
    state.brands.list_by_vehicle_type(vehicle_type_id).await
}

/// POST /api/v1/brands
///
/// A JSON `null` body is rejected without touching the store.
pub async fn create_brand(
    State(state): State<AppState>,
    payload: Result<Json<Option<Brand>>, JsonRejection>,
) -> AppResult<Outcome<Brand>> {
    let Json(input) = payload?;
    Ok(state.brands.create(input).await)
}

/// GET /api/v1/brands/{id}
pub async fn get_brand(State(state): State<AppState>, Path(id): Path<DbId>) -> Outcome<Brand> {
    state.brands.get(id).await
}

/// PUT /api/v1/brands/{id}
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateBrand>, JsonRejection>,
) -> AppResult<Outcome<&'static str>> {
    let Json(patch) = payload?;
    Ok(state.brands.update(id, &patch).await)
}

/// DELETE /api/v1/brands/{id}
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Outcome<&'static str> {
    state.brands.delete(id).await
}
