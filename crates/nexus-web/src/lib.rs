//! HTTP layer for the Haunted Nexus backend.

pub mod api;
pub mod error;
pub mod state;

pub use api::router;
pub use state::AppState;
