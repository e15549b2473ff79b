/// Social API library
///
/// REST backend for posts, comments and likes over SQLite.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Row types and response projections
/// - `services`: Business logic layer
/// - `db`: Connection pool, migrations and repositories
/// - `routes`: Route registration
/// - `error`: Error types and the error body
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
