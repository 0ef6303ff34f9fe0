use crate::query::{QueryClient, QueryKey};

use std::sync::Arc;

use tag_client::{CliClientResult, TagService};
use tag_core::Tag;

/// Read the tag list through the cache, refetching after an invalidation.
pub async fn fetch_tags(
    queries: &QueryClient,
    service: &dyn TagService,
) -> CliClientResult<Arc<Vec<Tag>>> {
    queries
        .fetch_query(&QueryKey::tags(), || service.list_tags())
        .await
}
