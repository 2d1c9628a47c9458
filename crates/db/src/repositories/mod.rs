//! Repository layer.
//!
//! Each entity kind has an async repository trait, so request handlers can be
//! driven by in-memory implementations in tests, and a PostgreSQL
//! implementation holding a cloned [`PgPool`](sqlx::PgPool).
//!
//! Storage failures are returned as opaque [`anyhow::Error`]s; repositories
//! never retry or reclassify them.

pub mod brand_repo;
pub mod vehicle_type_repo;

pub use brand_repo::{BrandRepository, PgBrandRepo};
pub use vehicle_type_repo::{PgVehicleTypeRepo, VehicleTypeRepository};
