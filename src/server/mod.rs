//! HTTP adapter: one stateless JSON endpoint wrapping the generator.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::{poem_router, POEM_PATH};
pub use state::AppState;
