use crate::CliClientResult;

use async_trait::async_trait;
use tag_core::{CreateTagRequest, Tag};

/// Remote collection of tags.
#[async_trait]
pub trait TagService: Send + Sync {
    /// Submit a new tag.
    ///
    /// Resolves as soon as the service answers, whatever the status code.
    /// Only transport failures are errors.
    async fn create_tag(&self, request: &CreateTagRequest) -> CliClientResult<()>;

    /// Fetch every tag.
    async fn list_tags(&self) -> CliClientResult<Vec<Tag>>;
}
