//! registrar-server: HTTP layer over a single-table user registry
//!
//! One business endpoint: POST /users validates a registration payload,
//! inserts it into PostgreSQL, and returns the stored row with its
//! generated id. Everything else here is plumbing for that operation.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{run_server, ApiError, ServerConfig};
pub use state::AppState;
