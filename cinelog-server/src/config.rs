//! Environment configuration
//!
//! Variable names match the original deployment:
//!   DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME  # database
//!   APP_PORT                                         # listen port
//!
//! DATABASE_URL, when set, takes precedence over the DB_* parts.

/// Default HTTP listen port
const DEFAULT_APP_PORT: u16 = 5000;

/// Application configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    /// Resolve configuration from process environment variables.
    ///
    /// Missing variables fall back to local-development defaults; a
    /// wrong database location surfaces later as a connection error,
    /// never as a startup panic.
    pub fn from_env() -> Self {
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_APP_PORT);

        Self {
            port,
            database_url: database_url_from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_APP_PORT,
            database_url: database_url_from_env(),
        }
    }
}

/// Build a PostgreSQL connection string from the environment.
///
/// DATABASE_URL wins when present; otherwise the URL is composed from
/// the individual DB_* variables.
fn database_url_from_env() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    let host = env_or("DB_HOST", "127.0.0.1");
    let port = env_or("DB_PORT", "5432");
    let user = env_or("DB_USER", "postgres");
    let password = std::env::var("DB_PASSWORD").unwrap_or_default();
    let name = env_or("DB_NAME", "cinelog");

    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{name}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_5000() {
        let config = AppConfig::default();
        assert_eq!(config.port, DEFAULT_APP_PORT);
    }

    #[test]
    fn database_url_has_postgres_scheme() {
        let config = AppConfig::from_env();
        assert!(config.database_url.starts_with("postgres"));
    }
}
