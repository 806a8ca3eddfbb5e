//! Domain models and input validation

pub mod user;
pub mod validation;

pub use user::{EmailAddress, FullName, IdentityNumber, NewUser};
pub use validation::ValidationError;
