// Route table.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health_handler, method_not_allowed, poem_handler};
use super::state::AppState;

/// Where the poem endpoint is mounted.
pub const POEM_PATH: &str = "/.netlify/functions/poem";

pub fn poem_router(state: AppState) -> Router {
    Router::new()
        .route(POEM_PATH, post(poem_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler))
        .with_state(state)
}
