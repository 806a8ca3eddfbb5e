//! User registration endpoint

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::models::{EmailAddress, FullName, IdentityNumber, NewUser, ValidationError};
use crate::state::AppState;

/// Create user request
///
/// All four fields are mandatory; a missing field or a date that does
/// not parse as YYYY-MM-DD is rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub identity_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl CreateUserRequest {
    /// Validate field contents into the domain input.
    fn validate(self) -> Result<NewUser, ValidationError> {
        Ok(NewUser {
            name: FullName::new(&self.name)?,
            identity_number: IdentityNumber::new(&self.identity_number)?,
            email: EmailAddress::new(&self.email)?,
            date_of_birth: self.date_of_birth,
        })
    }
}

/// User response - the stored row plus its generated id
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub identity_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            identity_number: u.identity_number,
            email: u.email,
            date_of_birth: u.date_of_birth,
        }
    }
}

/// POST /users - register a new user
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(req) = payload?;
    let new_user = req.validate()?;

    let user = UserRepo::new(state.pool()).create(new_user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}
