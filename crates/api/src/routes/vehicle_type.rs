//! Route definitions for vehicle types, mounted at `/vehicle-types`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{brand, vehicle_type};
use crate::state::AppState;

/// ```text
/// GET    /              -> list_vehicle_types
/// POST   /              -> create_vehicle_type
/// GET    /{id}          -> get_vehicle_type
/// PUT    /{id}          -> update_vehicle_type
/// GET    /{id}/brands   -> list_brands_by_vehicle_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(vehicle_type::list_vehicle_types).post(vehicle_type::create_vehicle_type),
        )
        .route(
            "/{id}",
            get(vehicle_type::get_vehicle_type).put(vehicle_type::update_vehicle_type),
        )
        .route("/{id}/brands", get(brand::list_brands_by_vehicle_type))
}
