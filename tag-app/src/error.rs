use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] tag_config::ConfigError),

    #[error("{0}")]
    Validation(#[from] tag_core::CoreError),

    #[error("Tag service error: {0}")]
    Client(#[from] tag_client::ClientError),

    #[error("A submission is already pending {location}")]
    SubmissionPending { location: ErrorLocation },

    #[error("Form is closed {location}")]
    FormClosed { location: ErrorLocation },

    #[error("IO error {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
