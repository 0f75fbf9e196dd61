//! Environment configuration.

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid CORS_ORIGIN entry: {0}")]
    InvalidOrigin(String),
}

pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    /// `None` means permit any origin (CORS_ORIGIN unset or `*`).
    pub cors_origins: Option<Vec<HeaderValue>>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/products".into());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 4000,
        };

        let cors_origins = match std::env::var("CORS_ORIGIN") {
            Ok(raw) if raw.trim() != "*" => {
                let mut origins = Vec::new();
                for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    let value = entry
                        .parse::<HeaderValue>()
                        .map_err(|_| ConfigError::InvalidOrigin(entry.to_string()))?;
                    origins.push(value);
                }
                Some(origins)
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            port,
            cors_origins,
        })
    }

    /// Origin restriction is a real policy here, not the permit-all the
    /// service historically shipped with.
    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            Some(origins) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.clone()))
                .allow_methods(Any)
                .allow_headers(Any),
            None => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        }
    }
}
