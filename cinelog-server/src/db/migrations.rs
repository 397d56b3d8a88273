//! Startup schema creation
//!
//! Ensures the movies and users tables exist. Running this also serves
//! as the boot-time connectivity probe: a failure is reported to the
//! caller, which logs it and keeps the server running.

use sqlx::PgPool;

use super::repos::DbError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    id       SERIAL PRIMARY KEY,
    title    TEXT NOT NULL,
    director TEXT NOT NULL,
    year     INT  NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id    SERIAL PRIMARY KEY,
    name  TEXT NOT NULL,
    email TEXT NOT NULL
);
"#;

/// Create the tables if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn run_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
