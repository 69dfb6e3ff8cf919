use serde::{Deserialize, Serialize};

use crate::utils::{BACKEND_URL, IMAGES_FIELD, THUMBNAIL_FIELD};

/// Deployment target; anything but `production` is treated as development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Build-time settings of the console (see `.env.example`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub dev_api_url: String,
    pub prod_api_url: String,
    pub logging: bool,
    pub log_level: String,
    /// Informational only: requests are not aborted on timeout
    pub request_timeout_secs: u32,
    pub uploads: UploadFields,
}

/// Multipart field names the upload middleware binds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFields {
    pub images: String,
    pub thumbnail: String,
}

impl Default for UploadFields {
    fn default() -> Self {
        Self {
            images: IMAGES_FIELD.to_string(),
            thumbnail: THUMBNAIL_FIELD.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            dev_api_url: BACKEND_URL.to_string(),
            prod_api_url: BACKEND_URL.to_string(),
            logging: true,
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            uploads: UploadFields::default(),
        }
    }
}

fn env_or(value: Option<&'static str>, default: &str) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default).to_string()
}

impl AppConfig {
    /// Values baked in by `build.rs` from `.env`, defaults for the rest
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: Environment::from_name(&env_or(option_env!("ENVIRONMENT"), "development")),
            dev_api_url: env_or(option_env!("BACKEND_URL_DEVELOPMENT"), &defaults.dev_api_url),
            prod_api_url: env_or(option_env!("BACKEND_URL_PRODUCTION"), &defaults.prod_api_url),
            logging: env_or(option_env!("ENABLE_LOGGING"), "true").parse().unwrap_or(true),
            log_level: env_or(option_env!("LOG_LEVEL"), &defaults.log_level),
            request_timeout_secs: env_or(option_env!("NETWORK_TIMEOUT_SECONDS"), "30")
                .parse()
                .unwrap_or(defaults.request_timeout_secs),
            uploads: UploadFields {
                images: env_or(option_env!("UPLOAD_IMAGES_FIELD"), IMAGES_FIELD),
                thumbnail: env_or(option_env!("UPLOAD_THUMBNAIL_FIELD"), THUMBNAIL_FIELD),
            },
        }
    }

    /// API base URL for the active environment
    pub fn backend_url(&self) -> &str {
        match self.environment {
            Environment::Production => &self.prod_api_url,
            Environment::Development => &self.dev_api_url,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.logging
    }

    /// Parsed log level, `Info` when the configured name is unknown
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_selects_production_url() {
        let config = AppConfig {
            environment: Environment::Production,
            dev_api_url: "http://dev.local".to_string(),
            prod_api_url: "https://api.example.com".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn unknown_environment_name_is_development() {
        assert_eq!(Environment::from_name("staging"), Environment::Development);
        assert_eq!(Environment::from_name("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::Production.as_str(), "production");
    }

    #[test]
    fn log_level_parses_and_falls_back() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn blank_env_values_use_default() {
        assert_eq!(env_or(Some("  "), "images"), "images");
        assert_eq!(env_or(Some(" photos "), "images"), "photos");
        assert_eq!(env_or(None, "thumbnail"), "thumbnail");
    }

    #[test]
    fn default_upload_fields() {
        let config = AppConfig::default();
        assert_eq!(config.uploads.images, "images");
        assert_eq!(config.uploads.thumbnail, "thumbnail");
    }
}
