//! Domain primitives shared by the database and API crates.
//!
//! This crate has no database or HTTP dependencies: it holds the id types and
//! the field-level merge rules that entity reconcilers are built from.

pub mod reconcile;
pub mod types;
