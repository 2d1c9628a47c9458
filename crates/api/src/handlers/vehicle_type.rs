//! Handlers for vehicle types.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use garage_core::types::{DbId, UNASSIGNED_ID};
use garage_db::models::vehicle_type::{UpdateVehicleType, VehicleType};
use garage_db::repositories::VehicleTypeRepository;

use super::{ID_NOT_FOUND, UPDATED};
use crate::error::AppResult;
use crate::outcome::Outcome;
use crate::state::AppState;

/// Orchestrates vehicle type operations over a [`VehicleTypeRepository`].
#[derive(Clone)]
pub struct VehicleTypeHandler {
    repo: Arc<dyn VehicleTypeRepository>,
}

impl VehicleTypeHandler {
    pub fn new(repo: Arc<dyn VehicleTypeRepository>) -> Self {
        Self { repo }
    }

    /// Insert a new vehicle type. Any client-supplied id is discarded.
    ///
    /// An insert that stores nothing is reported as `NotFound`.
    pub async fn create(&self, input: Option<VehicleType>) -> Outcome<VehicleType> {
        let Some(mut record) = input else {
            return Outcome::Invalid(None);
        };
        record.id = UNASSIGNED_ID;

        match self.repo.add(&record).await {
            Ok(Some(stored)) => {
                tracing::info!(vehicle_type_id = stored.id, "Vehicle type created");
                Outcome::Success(stored)
            }
            Ok(None) => {
                tracing::warn!("Vehicle type insert failed: no row stored");
                Outcome::NotFound
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create vehicle type");
                Outcome::failed(err)
            }
        }
    }

    /// Reconcile `patch` into the stored vehicle type `id` and persist it.
    pub async fn update(&self, id: DbId, patch: &UpdateVehicleType) -> Outcome<&'static str> {
        self.try_update(id, patch).await.unwrap_or_else(|err| {
            tracing::error!(vehicle_type_id = id, error = %err, "Failed to update vehicle type");
            Outcome::failed(err)
        })
    }

    async fn try_update(
        &self,
        id: DbId,
        patch: &UpdateVehicleType,
    ) -> anyhow::Result<Outcome<&'static str>> {
        let Some(existing) = self.repo.get_by_id(id).await? else {
            return Ok(Outcome::Invalid(Some(ID_NOT_FOUND)));
        };

        let merged = existing.reconcile(patch);
        if !merged.accepted {
            tracing::warn!(
                vehicle_type_id = id,
                patch_id = ?patch.id,
                "Vehicle type patch id does not match target",
            );
            return Ok(Outcome::Invalid(None));
        }

        if !self.repo.update(id, &merged.record).await? {
            return Ok(Outcome::Invalid(None));
        }

        tracing::info!(vehicle_type_id = id, "Vehicle type updated");
        Ok(Outcome::Success(UPDATED))
    }

    /// List every vehicle type. An empty store is reported as `NotFound`.
    pub async fn list(&self) -> Outcome<Vec<VehicleType>> {
        match self.repo.get_all().await {
            Ok(rows) if rows.is_empty() => Outcome::NotFound,
            Ok(rows) => Outcome::Success(rows),
            Err(err) => {
                tracing::error!(error = %err, "Failed to list vehicle types");
                Outcome::failed(err)
            }
        }
    }

    /// Fetch a single vehicle type.
    pub async fn get(&self, id: DbId) -> Outcome<VehicleType> {
        match self.repo.get_by_id(id).await {
            Ok(Some(row)) => Outcome::Success(row),
            Ok(None) => Outcome::NotFound,
            Err(err) => {
                tracing::error!(vehicle_type_id = id, error = %err, "Failed to load vehicle type");
                Outcome::failed(err)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/vehicle-types
pub async fn list_vehicle_types(State(state): State<AppState>) -> Outcome<Vec<VehicleType>> {
    state.vehicle_types.list().await
}

/// POST /api/v1/vehicle-types
///
/// A JSON `null` body is rejected without touching the store.
pub async fn create_vehicle_type(
    State(state): State<AppState>,
    payload: Result<Json<Option<VehicleType>>, JsonRejection>,
) -> AppResult<Outcome<VehicleType>> {
    let Json(input) = payload?;
    Ok(state.vehicle_types.create(input).await)
}

/// GET /api/v1/vehicle-types/{id}
pub async fn get_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Outcome<VehicleType> {
    state.vehicle_types.get(id).await
}

/// PUT /api/v1/vehicle-types/{id}
pub async fn update_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateVehicleType>, JsonRejection>,
) -> AppResult<Outcome<&'static str>> {
    let Json(patch) = payload?;
    Ok(state.vehicle_types.update(id, &patch).await)
}
