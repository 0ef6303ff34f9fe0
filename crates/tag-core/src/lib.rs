pub mod error;
pub mod models;
pub mod slug;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreErrorResult};
pub use models::create_tag_request::CreateTagRequest;
pub use models::tag::{Tag, TagId};
pub use models::tag_draft::TagDraft;
pub use models::tag_name::{MIN_NAME_LENGTH, MIN_NAME_LENGTH_MESSAGE, TagName};
pub use slug::derive_slug;
