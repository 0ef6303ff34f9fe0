mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod toast_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use toast_config::ToastConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TAGS_PATH: &str = "/tags";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_TOAST_BACKGROUND: &str = "#09090b";
const DEFAULT_TOAST_BORDER: &str = "#18181b";
const DEFAULT_TOAST_RICH_COLORS: bool = true;

const CONFIG_DIR_ENV: &str = "TAGS_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".tags";
const CONFIG_FILE_NAME: &str = "config.toml";
