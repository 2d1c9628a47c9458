//! Domain model structs, patch DTOs, and reconcilers.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row. The
//!   same struct is the create payload; its `id` is reset before insertion.
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - A `reconcile` method merging a patch into a stored row

pub mod brand;
pub mod vehicle_type;
