//! Service health, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    /// `ok` when the registry tables are reachable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The database answered a trivial query.
    pub database: bool,
    /// Both registry tables exist.
    pub schema: bool,
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    let database = garage_db::health_check(&state.pool).await.is_ok();
    let schema = database
        && garage_db::schema_ready(&state.pool)
            .await
            .unwrap_or(false);

    if !schema {
        tracing::warn!(database, schema, "Health check degraded");
    }

    Json(Health {
        status: if schema { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        schema,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
