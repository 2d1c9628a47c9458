pub mod brand;
pub mod health;
pub mod vehicle_type;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vehicle-types                       list, create
/// /vehicle-types/{id}                  get, update
/// /vehicle-types/{id}/brands           brands of one vehicle type
///
/// /brands                              list, create
/// /brands/{id}                         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vehicle-types", vehicle_type::router())
        .nest("/brands", brand::router())
}
