use crate::error::AppError;
use dotenv::dotenv;
use std::env;

/// Application-level settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// CORS settings; `allowed_origins` is a comma-separated list, `*` allows any
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: String,
}

/// Service configuration assembled from environment variables.
/// Missing variables fall back to defaults; present-but-unparseable numeric
/// values are a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let app = AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
        };

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://sns_api.db".to_string()),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
        };

        let cors = CorsConfig {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        };

        Ok(Self {
            app,
            database,
            cors,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| AppError::Config(format!("invalid {name} value: {value}"))),
        Err(_) => Ok(default),
    }
}
