//! Request handlers.
//!
//! Each entity kind has a handler struct that orchestrates one operation per
//! call (repository access, reconciliation, outcome mapping) and a set of
//! Axum endpoint functions that extract the request and delegate to it.
//! Collaborator failures are caught here and never propagate past the
//! handler.

pub mod brand;
pub mod vehicle_type;

pub use brand::BrandHandler;
pub use vehicle_type::VehicleTypeHandler;

/// Reported when a collection read returns no rows.
pub const DATA_NOT_FOUND: &str = "Data Not Found";

/// Reported when a referenced or updated id does not exist.
pub const ID_NOT_FOUND: &str = "Id not found";

/// Reported when deleting a brand that does not exist.
pub const DELETE_TARGET_MISSING: &str = "Something Went Wrong";

/// Reported when a brand patch references an unknown vehicle type.
pub const VEHICLE_TYPE_NOT_FOUND: &str = "Vehicle type not found";

/// Payload of a successful update.
pub const UPDATED: &str = "Success";

/// Payload of a successful delete.
pub const DELETED: &str = "Deleted";
