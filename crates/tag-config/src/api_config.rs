use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TAGS_PATH};

use serde::Deserialize;

/// Where the tag service lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the tag service
    pub base_url: String,
    /// Path of the tag collection endpoint, relative to `base_url`
    pub tags_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            tags_path: String::from(DEFAULT_TAGS_PATH),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Plain http only: the client is built without a TLS backend.
        match self.base_url.strip_prefix("http://") {
            None => {
                return Err(ConfigError::api(format!(
                    "api.base_url must start with http://, got '{}'",
                    self.base_url
                )));
            }
            Some(host) if host.trim_matches('/').is_empty() => {
                return Err(ConfigError::api(format!(
                    "api.base_url has no host: '{}'",
                    self.base_url
                )));
            }
            Some(_) => {}
        }

        if !self.tags_path.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.tags_path must start with '/', got '{}'",
                self.tags_path
            )));
        }

        Ok(())
    }
}
