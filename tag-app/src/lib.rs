pub mod cli;
pub mod commands;
pub mod error;
pub mod flow;
pub mod form;
pub mod logger;
pub mod query;
pub mod toast;

#[cfg(test)]
mod tests;

pub use error::{AppError, Result as AppErrorResult};
pub use flow::{TAG_CREATED_MESSAGE, TagCreationFlow};
pub use form::{CreateTagForm, FormView, SubmitButton, SubmitIcon};
pub use query::{QueryClient, QueryKey, TAGS_QUERY_KEY, fetch_tags};
pub use toast::{Notifier, Toast, ToastKind, Toaster};
