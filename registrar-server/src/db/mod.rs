//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One pool checkout per request, released when the handle drops
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions around writes - one commit boundary per operation

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
