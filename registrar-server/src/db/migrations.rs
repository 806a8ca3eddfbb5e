//! Database migrations for the users table

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    // Create users table. Uniqueness of identity_number and email is
    // enforced here, atomically across concurrent commits; the
    // application never does check-then-insert.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            identity_number TEXT NOT NULL CONSTRAINT users_identity_number_key UNIQUE,
            email TEXT NOT NULL CONSTRAINT users_email_key UNIQUE,
            date_of_birth DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_name ON users(name)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
