use crate::{CoreErrorResult, TagName, derive_slug};

/// Name being edited in the create form, with its live slug preview.
///
/// The slug is never set directly: it is recomputed every time the name
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDraft {
    name: String,
    slug: String,
}

impl TagDraft {
    pub fn new(name: &str) -> Self {
        let mut draft = Self::default();
        draft.set_name(name);
        draft
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Replace the name and recompute the slug.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.slug = if self.name.is_empty() {
            String::new()
        } else {
            derive_slug(&self.name)
        };
    }

    /// Validate the current name for submission.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<TagName> {
        TagName::parse(&self.name)
    }
}
