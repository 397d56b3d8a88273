//! Movie repository
//!
//! `update` intentionally ignores the affected-row count: a PUT against
//! a missing id still reports success, matching the published contract.

use sqlx::PgPool;

use super::DbError;
use crate::models::{Movie, MovieDraft};

/// Movie repository
pub struct MovieRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MovieRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all movies. No ordering guarantee.
    pub async fn list(&self) -> Result<Vec<Movie>, DbError> {
        let movies = sqlx::query_as::<_, Movie>("SELECT id, title, director, year FROM movies")
            .fetch_all(self.pool)
            .await?;

        Ok(movies)
    }

    /// Get a single movie by id, `None` when absent.
    pub async fn get(&self, id: i32) -> Result<Option<Movie>, DbError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, director, year FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(movie)
    }

    /// Insert a movie; the database assigns the id.
    pub async fn create(&self, draft: &MovieDraft) -> Result<(), DbError> {
        sqlx::query("INSERT INTO movies (title, director, year) VALUES ($1, $2, $3)")
            .bind(draft.title())
            .bind(draft.director())
            .bind(draft.year())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Overwrite all fields of the movie matching `id`.
    pub async fn update(&self, id: i32, draft: &MovieDraft) -> Result<(), DbError> {
        sqlx::query("UPDATE movies SET title = $1, director = $2, year = $3 WHERE id = $4")
            .bind(draft.title())
            .bind(draft.director())
            .bind(draft.year())
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

    // Integration tests - run with DATABASE_URL set
    // cargo test -p cinelog-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trip() {
        let pool = test_pool().await;
        let repo = MovieRepo::new(&pool);

        let draft = MovieDraft::new("Dune", "Villeneuve", 2021).unwrap();
        repo.create(&draft).await.expect("create failed");

        let listed = repo.list().await.expect("list failed");
        let stored = listed
            .iter()
            .find(|m| m.title == "Dune" && m.director == "Villeneuve" && m.year == 2021)
            .expect("created movie missing from list");

        let fetched = repo.get(stored.id).await.expect("get failed");
        assert!(fetched.is_some());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_id_is_none() {
        let pool = test_pool().await;
        let repo = MovieRepo::new(&pool);

        let missing = repo.get(i32::MAX).await.expect("get failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_id_creates_nothing() {
        let pool = test_pool().await;
        let repo = MovieRepo::new(&pool);

        let before = repo.list().await.expect("list failed").len();
        let draft = MovieDraft::new("Ghost", "Nobody", 1990).unwrap();
        repo.update(i32::MAX, &draft).await.expect("update failed");
        let after = repo.list().await.expect("list failed").len();

        assert_eq!(before, after);
    }
}
