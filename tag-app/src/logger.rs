use crate::error::{AppError, Result as AppErrorResult};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{LevelFilter, Record, debug};

/// HTTP stack crates that are only interesting when something breaks.
const QUIET_TARGETS: [&str; 3] = ["hyper_util", "reqwest", "wiremock"];

/// Initialize logger with fern
///
/// Log lines go to stderr (or the log file) so stdout stays clean for
/// command output.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored level names (ignored when logging to file)
pub fn initialize(
    log_level: tag_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = log_level.0;

    let sink: Output = match log_file {
        Some(ref log_path) => std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| AppError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?
            .into(),
        None => std::io::stderr().into(),
    };

    let formatted = if colored && log_file.is_none() {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            write_line(out, message, record, colors.color(record.level()))
        })
    } else {
        Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
    };

    QUIET_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, target| {
            dispatch.level_for(*target, level_filter.min(LevelFilter::Warn))
        })
        .chain(formatted.chain(sink))
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
