use serde::Deserialize;

use crate::{Error, Result};

/// Value shipped in `config/default.toml`; deploying with it is a configuration error.
pub const PLACEHOLDER_ENDPOINT_ID: &str = "PON_AQUI_TU_LLAVE";
pub const DEFAULT_RELAY_BASE_URL: &str = "https://formspree.io/f";

/// Form relay settings, built once at startup and shared read-only.
#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    #[serde(default)]
    pub endpoint_id: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint_id: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_RELAY_BASE_URL.to_owned()
}

impl RelayConfig {
    pub fn new(endpoint_id: impl Into<String>) -> Self {
        Self {
            endpoint_id: Some(endpoint_id.into()),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn usable_endpoint_id(&self) -> Option<&str> {
        self.endpoint_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != PLACEHOLDER_ENDPOINT_ID)
    }

    pub fn is_configured(&self) -> bool {
        self.usable_endpoint_id().is_some()
    }

    pub fn endpoint_url(&self) -> Result<String> {
        let Some(id) = self.usable_endpoint_id() else {
            return Err(Error::Config);
        };

        Ok(format!("{}/{id}", self.base_url.trim_end_matches('/')))
    }
}
