use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use evoca_lead::RelayConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_og_image")]
    pub og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            contact_email: default_contact_email(),
            og_image: default_og_image(),
        }
    }
}

fn default_base_url() -> String {
    "https://evocapro.com".to_string()
}

fn default_contact_email() -> String {
    "hola@evocapro.com".to_string()
}

fn default_og_image() -> String {
    "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `FORMSPREE_ID` (legacy deployment variable)
    /// 2. Environment variables (EVOCA__RELAY__ENDPOINT_ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: the site must boot without any file
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("EVOCA")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(endpoint_id) = env::var("FORMSPREE_ID") {
            builder = builder.set_override("relay.endpoint_id", endpoint_id)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// A missing relay endpoint is not an error here: the site still serves
    /// pages and the lead forms report the problem to the visitor.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Err(e) = url::Url::parse(&self.site.base_url) {
            return Err(format!("Invalid site.base_url: {e}"));
        }
        if let Err(e) = url::Url::parse(&self.relay.base_url) {
            return Err(format!("Invalid relay.base_url: {e}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            relay: RelayConfig::default(),
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_missing_relay_id_is_allowed() {
        let config = config();

        assert!(!config.relay.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_base_urls() {
        let mut config = config();
        config.site.base_url = "evocapro.com".to_string();
        assert!(config.validate().is_err());

        let mut config = self::config();
        config.relay.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_defaults() {
        let config = Config::load(Some("does/not/exist.toml".to_string())).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.relay.base_url, "https://formspree.io/f");
        assert_eq!(config.observability.log_level, "info");
    }
}
