use std::env;

/// Runtime settings for the HTTP server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Interface the server binds to.
    pub address: String,
    /// TCP port the server listens on.
    pub port: u16,
    /// Number of actix workers; `None` keeps the actix default.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "app.db".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `ADDRESS`, `PORT` and `WORKERS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid PORT `{value}`, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let workers = lookup("WORKERS")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|workers| *workers > 0);

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
            workers,
        }
    }
}
