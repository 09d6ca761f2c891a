use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Bearer token granting the `ADMIN` capability.
    pub admin_token: String,

    /// Public base URL prefixed to every link href, empty for relative links.
    pub app_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin_token = required("ADMIN_TOKEN")?;
        if admin_token.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "ADMIN_TOKEN".to_string(),
                reason: "must not be blank".to_string(),
            }
            .into());
        }

        // Relative links when unset
        let app_url = std::env::var("APP_URL").unwrap_or_default();
        if !app_url.is_empty() {
            Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "APP_URL".to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            admin_token,
            app_url: app_url.trim_end_matches('/').to_string(),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
