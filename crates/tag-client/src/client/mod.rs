pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod tag_service;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use tag_service::TagService;
