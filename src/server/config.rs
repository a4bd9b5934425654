use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CHECKOUT_API_BASE: &str = "https://api.stripe.com";

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_addr: String,

    pub admin_email: String,
    pub admin_password: String,

    pub checkout_secret_key: String,
    pub checkout_api_base: String,

    pub media_cloud_name: String,
    pub media_api_key: String,
    pub media_api_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = std::env::var("APP_URL")
            .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?;

        // Fail at boot rather than when the first checkout link is built
        Url::parse(&app_url).map_err(|_| ConfigError::InvalidUrl(app_url.clone()))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()))?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?,
            checkout_secret_key: std::env::var("CHECKOUT_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("CHECKOUT_SECRET_KEY".to_string()))?,
            checkout_api_base: std::env::var("CHECKOUT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_CHECKOUT_API_BASE.to_string()),
            media_cloud_name: std::env::var("MEDIA_CLOUD_NAME")
                .map_err(|_| ConfigError::MissingEnvVar("MEDIA_CLOUD_NAME".to_string()))?,
            media_api_key: std::env::var("MEDIA_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("MEDIA_API_KEY".to_string()))?,
            media_api_secret: std::env::var("MEDIA_API_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("MEDIA_API_SECRET".to_string()))?,
        })
    }
}
