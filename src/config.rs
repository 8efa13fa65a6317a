//! Environment-driven configuration for the database and colour palette.
//!
//! The store connection is described entirely by `DB_*` environment
//! variables, matching the deployment contract of the service this crate
//! backs. The default colour palette used for new categories also lives
//! here so embedders can substitute their own.

use crate::category::domain::{CategoryDomainError, Palette};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::env;
use thiserror::Error;

/// `PostgreSQL` connection pool shared by the storage adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Colours assigned to categories when the caller does not pick one.
pub const DEFAULT_COLOR_PALETTE: &[&str] = &[
    "#E53E3E", "#DD6B20", "#D69E2E", "#38A169", "#319795", "#3182CE", "#805AD5", "#D53F8C",
];

/// Errors raised while loading configuration or connecting to the store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("{0} is not set")]
    MissingVar(&'static str),

    /// The connection pool could not be constructed.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// The built-in palette failed validation.
    #[error(transparent)]
    Palette(#[from] CategoryDomainError),
}

/// Database connection parameters.
#[derive(Debug, Clone)]
pub struct DbConfig {
    host: String,
    port: String,
    user: String,
    password: String,
    name: String,
}

impl DbConfig {
    /// Reads connection parameters from `DB_HOST`, `DB_PORT`, `DB_USER`,
    /// `DB_PASSWORD`, and `DB_NAME`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] naming the first variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: required("DB_HOST")?,
            port: required("DB_PORT")?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            name: required("DB_NAME")?,
        })
    }

    /// Renders the libpq-style connection string.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            self.host, self.port, self.user, self.password, self.name
        )
    }
}

/// Builds an r2d2 connection pool from the given configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Pool`] when the pool cannot be created.
pub fn build_pool(config: &DbConfig) -> Result<PgPool, ConfigError> {
    let manager = ConnectionManager::<PgConnection>::new(config.connection_string());
    Ok(Pool::builder().build(manager)?)
}

/// Returns the default category colour palette.
///
/// # Errors
///
/// Returns [`ConfigError::Palette`] when the built-in palette is empty,
/// which would indicate a build misconfiguration.
pub fn default_palette() -> Result<Palette, ConfigError> {
    let colors = DEFAULT_COLOR_PALETTE
        .iter()
        .map(|color| (*color).to_owned())
        .collect();
    Ok(Palette::new(colors)?)
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
