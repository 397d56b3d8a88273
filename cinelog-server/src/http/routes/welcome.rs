//! Root endpoint

use axum::{routing::get, Router};

/// GET /
async fn welcome() -> &'static str {
    "Welcome to my favorite movie list"
}

/// Welcome route
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_text() {
        assert_eq!(welcome().await, "Welcome to my favorite movie list");
    }
}
