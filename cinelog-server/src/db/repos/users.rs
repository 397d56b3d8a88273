//! User repository
//!
//! `create` returns the stored record so the handler can echo the
//! database-assigned id back to the client (RETURNING id).

use sqlx::PgPool;

use super::DbError;
use crate::models::{User, UserDraft};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users. No ordering guarantee.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Get a single user by id, `None` when absent.
    pub async fn get(&self, id: i32) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// Insert a user and return the record with its assigned id.
    pub async fn create(&self, draft: &UserDraft) -> Result<User, DbError> {
        let id: i32 = sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
            .bind(draft.name())
            .bind(draft.email())
            .fetch_one(self.pool)
            .await?;

        Ok(User {
            id,
            name: draft.name().to_owned(),
            email: draft.email().to_owned(),
        })
    }

    /// Overwrite all fields of the user matching `id`.
    /// Affected-row count is not checked, same as the movie repo.
    pub async fn update(&self, id: i32, draft: &UserDraft) -> Result<(), DbError> {
        sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(draft.name())
            .bind(draft.email())
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_returns_assigned_id() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let draft = UserDraft::new("Ada", "ada@example.com").unwrap();
        let created = repo.create(&draft).await.expect("create failed");
        assert!(created.id > 0);
        assert_eq!(created.name, "Ada");
        assert_eq!(created.email, "ada@example.com");

        let fetched = repo.get(created.id).await.expect("get failed");
        assert!(fetched.is_some());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_id_is_none() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let missing = repo.get(i32::MAX).await.expect("get failed");
        assert!(missing.is_none());
    }
}
