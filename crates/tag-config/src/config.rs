use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, ToastConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub toast: ToastConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TAGS_CONFIG_DIR env var, else use ./.tags/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TAGS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TAGS_CONFIG_DIR env var > ./.tags/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all sections. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.toast.validate()?;
        Ok(())
    }

    /// Absolute URL of the tag collection endpoint.
    pub fn tags_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.tags_path
        )
    }

    /// Absolute path of the log file, if file logging is configured.
    /// Relative paths resolve against the config directory.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            None => Ok(None),
            Some(file) if Path::new(file).is_absolute() => Ok(Some(PathBuf::from(file))),
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
        }
    }

    /// Where log lines end up, as shown in the summary.
    pub fn log_destination(&self) -> &str {
        self.logging.file.as_deref().unwrap_or("stderr")
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.tags_url());
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.log_destination()
        );
        info!(
            "  toast: background={}, border={}, rich_colors={}",
            self.toast.background, self.toast.border, self.toast.rich_colors
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("TAGS_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("TAGS_API_TAGS_PATH", &mut self.api.tags_path);

        // Logging
        Self::apply_env_parse("TAGS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TAGS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TAGS_LOG_FILE", &mut self.logging.file);

        // Toast
        Self::apply_env_string("TAGS_TOAST_BACKGROUND", &mut self.toast.background);
        Self::apply_env_string("TAGS_TOAST_BORDER", &mut self.toast.border);
        Self::apply_env_bool("TAGS_TOAST_RICH_COLORS", &mut self.toast.rich_colors);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
