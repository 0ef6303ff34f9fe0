use crate::{CoreError, CoreErrorResult};

use std::fmt;
use std::ops::Deref;
use std::panic::Location;

use error_location::ErrorLocation;

/// Shortest name a tag may be submitted with, in UTF-16 code units.
pub const MIN_NAME_LENGTH: usize = 3;

/// Message shown beneath the name field when validation fails.
pub const MIN_NAME_LENGTH_MESSAGE: &str = "Minimum 3 characters.";

/// A tag display name that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    /// Validate a raw name.
    ///
    /// Length is measured in UTF-16 code units, the way the web form counts
    /// it, so a character outside the BMP counts twice.
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        if raw.encode_utf16().count() < MIN_NAME_LENGTH {
            return Err(CoreError::Validation {
                field: "name",
                message: MIN_NAME_LENGTH_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TagName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
