//! User-facing notifications.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use colored::Colorize;
use log::warn;
use tag_config::{ConfigErrorResult, ToastConfig};

/// Something that can tell the user an action went through.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Writes toasts to a terminal-like sink and remembers what it showed.
pub struct Toaster {
    background: (u8, u8, u8),
    border: (u8, u8, u8),
    rich_colors: bool,
    out: Mutex<Box<dyn Write + Send>>,
    history: Mutex<Vec<Toast>>,
}

impl Toaster {
    /// Toaster printing to stdout.
    pub fn stdout(config: &ToastConfig) -> ConfigErrorResult<Self> {
        Self::with_writer(config, Box::new(std::io::stdout()))
    }

    pub fn with_writer(config: &ToastConfig, out: Box<dyn Write + Send>) -> ConfigErrorResult<Self> {
        Ok(Self {
            background: config.background_rgb()?,
            border: config.border_rgb()?,
            rich_colors: config.rich_colors,
            out: Mutex::new(out),
            history: Mutex::new(Vec::new()),
        })
    }

    /// Every toast shown so far, oldest first.
    pub fn history(&self) -> Vec<Toast> {
        lock(&self.history).clone()
    }

    pub fn show(&self, toast: Toast) {
        let line = self.render(&toast);

        if let Err(e) = writeln!(lock(&self.out), "{line}") {
            warn!("Failed to display toast '{}': {}", toast.message, e);
        }

        lock(&self.history).push(toast);
    }

    fn render(&self, toast: &Toast) -> String {
        let (br, bg, bb) = self.border;
        let (r, g, b) = self.background;

        let body = format!(" {} {} ", toast.kind.icon(), toast.message);
        let body = if self.rich_colors {
            match toast.kind {
                ToastKind::Success => body.green(),
            }
        } else {
            body.normal()
        };

        format!("{}{}", "▌".truecolor(br, bg, bb), body.on_truecolor(r, g, b))
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        self.show(Toast {
            kind: ToastKind::Success,
            message: message.to_string(),
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
