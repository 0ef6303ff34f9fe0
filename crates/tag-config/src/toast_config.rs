use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOAST_BACKGROUND, DEFAULT_TOAST_BORDER,
    DEFAULT_TOAST_RICH_COLORS,
};

use serde::Deserialize;

/// Look of the toast notifications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Background color, `#rrggbb`
    pub background: String,
    /// Border color, `#rrggbb`
    pub border: String,
    /// Color the toast by kind (green for success) instead of plain text
    pub rich_colors: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            background: String::from(DEFAULT_TOAST_BACKGROUND),
            border: String::from(DEFAULT_TOAST_BORDER),
            rich_colors: DEFAULT_TOAST_RICH_COLORS,
        }
    }
}

impl ToastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::parse_hex_color(&self.background).map_err(|_| {
            ConfigError::toast(format!(
                "toast.background must be #rrggbb, got '{}'",
                self.background
            ))
        })?;
        Self::parse_hex_color(&self.border).map_err(|_| {
            ConfigError::toast(format!(
                "toast.border must be #rrggbb, got '{}'",
                self.border
            ))
        })?;

        Ok(())
    }

    /// Background as an RGB triple.
    pub fn background_rgb(&self) -> ConfigErrorResult<(u8, u8, u8)> {
        Self::parse_hex_color(&self.background)
    }

    /// Border as an RGB triple.
    pub fn border_rgb(&self) -> ConfigErrorResult<(u8, u8, u8)> {
        Self::parse_hex_color(&self.border)
    }

    #[track_caller]
    fn parse_hex_color(value: &str) -> ConfigErrorResult<(u8, u8, u8)> {
        let hex = value
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ConfigError::toast(format!("invalid color '{value}'")))?;

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ConfigError::toast(format!("invalid color '{value}': {e}")))
        };

        Ok((channel(0)?, channel(2)?, channel(4)?))
    }
}
