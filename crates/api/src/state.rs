use std::sync::Arc;

use garage_db::repositories::{
    BrandRepository, PgBrandRepo, PgVehicleTypeRepo, VehicleTypeRepository,
};

use crate::handlers::{BrandHandler, VehicleTypeHandler};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: garage_db::DbPool,
    /// Vehicle type operations.
    pub vehicle_types: VehicleTypeHandler,
    /// Brand operations.
    pub brands: BrandHandler,
}

impl AppState {
    /// Wire the PostgreSQL repositories over `pool` into the handlers.
    pub fn new(pool: garage_db::DbPool) -> Self {
        let vehicle_types: Arc<dyn VehicleTypeRepository> =
            Arc::new(PgVehicleTypeRepo::new(pool.clone()));
        let brands: Arc<dyn BrandRepository> = Arc::new(PgBrandRepo::new(pool.clone()));
        Self::with_repositories(pool, vehicle_types, brands)
    }

    /// Build state over caller-supplied repositories.
    pub fn with_repositories(
        pool: garage_db::DbPool,
        vehicle_types: Arc<dyn VehicleTypeRepository>,
        brands: Arc<dyn BrandRepository>,
    ) -> Self {
        Self {
            pool,
            vehicle_types: VehicleTypeHandler::new(Arc::clone(&vehicle_types)),
            brands: BrandHandler::new(brands, vehicle_types),
        }
    }
}
