//! User repository
//!
//! Handles user creation with proper patterns:
//! - create: INSERT inside a transaction, conflicts surfaced from DB constraints
//! - reload after commit so the generated id comes from storage

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub identity_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("{field} already registered")]
    Conflict { field: &'static str },

    #[error("storage unavailable: {0}")]
    Unavailable(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict {
                    field: match db_err.constraint() {
                        Some("users_identity_number_key") => "identity_number",
                        Some("users_email_key") => "email",
                        _ => "unique field",
                    },
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(e)
            }
            _ => Self::Sqlx(e),
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return the committed row.
    ///
    /// The INSERT runs inside a transaction and commits as one atomic
    /// unit; on any failure zero rows are persisted. After commit the
    /// row is reloaded by its generated id so the caller gets exactly
    /// what storage holds.
    pub async fn create(&self, new_user: NewUser) -> Result<User, DbError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, identity_number, email, date_of_birth)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new_user.name.as_str())
        .bind(new_user.identity_number.as_str())
        .bind(new_user.email.as_str())
        .bind(new_user.date_of_birth)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get(id).await
    }

    /// Fetch a user by generated id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, identity_number, email, date_of_birth FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Total persisted user count.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
