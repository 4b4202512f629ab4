use crate::error::{AppError, ConfigError};

/// Default retry budget for the register transaction when the storage layer
/// reports a transient conflict.
pub const DEFAULT_REGISTER_MAX_ATTEMPTS: u32 = 3;

pub struct Config {
    pub database_url: String,
    pub register_max_attempts: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let register_max_attempts = match std::env::var("REGISTER_MAX_ATTEMPTS") {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(attempts) if attempts > 0 => attempts,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "REGISTER_MAX_ATTEMPTS".to_string(),
                        value: raw,
                    }
                    .into())
                }
            },
            Err(_) => DEFAULT_REGISTER_MAX_ATTEMPTS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            register_max_attempts,
        })
    }
}
