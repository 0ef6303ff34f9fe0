use std::fmt;

/// Segment identifying the tag list query.
pub const TAGS_QUERY_KEY: &str = "get-tags";

/// Identity of a cached query, made of ordered segments.
///
/// Invalidation matches by prefix: invalidating `["get-tags"]` also marks
/// `["get-tags", "page-2"]` stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Key of the tag list.
    pub fn tags() -> Self {
        Self::new([TAGS_QUERY_KEY])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
