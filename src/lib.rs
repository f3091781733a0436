//! Poem Engine — tiny template-driven poems for a mood and a snack.
//!
//! Picks one fragment from each of a few fixed phrase pools, fills in
//! the mood and food, and lays the lines out as a short note or a
//! slightly longer poem. The `server` feature wraps it in a single
//! stateless JSON endpoint.

#[cfg(feature = "server")]
pub mod config;
pub mod core;
pub mod schema;
#[cfg(feature = "server")]
pub mod server;
