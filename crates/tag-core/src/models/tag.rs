use std::fmt;

use serde::{Deserialize, Serialize};

/// A tag as stored by the tag service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub amount_of_videos: u64,
}

/// Server-assigned identity. Depending on the backend it arrives either as a
/// number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagId::Number(n) => write!(f, "{n}"),
            TagId::Text(s) => f.write_str(s),
        }
    }
}
