use crate::error::Result as AppErrorResult;
use crate::query::{QueryClient, QueryKey};
use crate::toast::Notifier;

use std::sync::Arc;

use log::info;
use tag_client::TagService;
use tag_core::{CreateTagRequest, TagName};

/// Toast shown once a tag has been submitted.
pub const TAG_CREATED_MESSAGE: &str = "Tag has been created";

/// Submits a tag, then refreshes the tag list and tells the user.
pub struct TagCreationFlow {
    service: Arc<dyn TagService>,
    queries: QueryClient,
    notifier: Arc<dyn Notifier>,
}

impl TagCreationFlow {
    pub fn new(
        service: Arc<dyn TagService>,
        queries: QueryClient,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            queries,
            notifier,
        }
    }

    /// Create a tag from an already validated name.
    ///
    /// Cache invalidation and the toast only happen once the transport has
    /// resolved. A transport error returns early and skips both; nothing is
    /// retried and no error toast is shown.
    pub async fn create_tag(&self, name: &TagName) -> AppErrorResult<()> {
        let request = CreateTagRequest::new(name);
        info!("Creating tag '{}' (slug '{}')", request.title, request.slug);

        self.service.create_tag(&request).await?;

        self.queries.invalidate(&QueryKey::tags()).await;
        self.notifier.success(TAG_CREATED_MESSAGE);

        Ok(())
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    pub fn service(&self) -> &dyn TagService {
        self.service.as_ref()
    }
}
