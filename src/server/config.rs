use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_UNIT_NAME: &str = "Unidade Principal";

pub struct Config {
    pub database_url: String,

    /// Name given to the unit seeded on first start when no unit exists yet.
    pub default_unit_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            default_unit_name: std::env::var("DEFAULT_UNIT_NAME")
                .ok()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_UNIT_NAME.to_string()),
        })
    }
}
