//! Repository implementations for database access
//!
//! Repositories borrow the pool and follow these patterns:
//! - Handle conflicts via DB constraints (no check-then-insert)
//! - Transactions around writes - one commit boundary per operation

pub mod users;

pub use users::{DbError, User, UserRepo};
