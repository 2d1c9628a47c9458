//! Vehicle type / brand registry API server library.
//!
//! Exposes the building blocks (config, state, request handlers, error
//! handling, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod outcome;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
