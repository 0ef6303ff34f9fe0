use crate::{TagName, derive_slug};

use serde::Serialize;

/// Body of the tag creation POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub title: String,
    pub slug: String,
    pub amount_of_videos: u64,
}

impl CreateTagRequest {
    /// Build the request for a validated name. New tags start with no videos.
    pub fn new(name: &TagName) -> Self {
        Self {
            title: name.to_string(),
            slug: derive_slug(name),
            amount_of_videos: 0,
        }
    }
}
