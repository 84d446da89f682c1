use serde::{Deserialize, Serialize};

/// A decoded create/update request body.
///
/// Every attribute is optional on the wire. The accessors apply the falsy
/// rule: an absent field, `null`, an empty string and a zero year all read
/// back as `None`. Callers must go through the accessors rather than the raw
/// fields so the rule is applied consistently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoviePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl MoviePayload {
    /// A payload carrying all three attributes.
    pub fn full(title: impl Into<String>, genre: impl Into<String>, year: i64) -> Self {
        Self {
            title: Some(title.into()),
            genre: Some(genre.into()),
            year: Some(year),
        }
    }

    /// The title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The genre, if present and non-empty.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    /// The year, if present and non-zero.
    pub fn year(&self) -> Option<i64> {
        self.year.filter(|y| *y != 0)
    }
}

/// A movie that has not yet been assigned an id.
///
/// All three attributes are guaranteed present and truthy, which is what
/// keeps incomplete records out of the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub(crate) title: String,
    pub(crate) genre: String,
    pub(crate) year: i64,
}

impl NewMovie {
    /// Extract a draft from a payload, or `None` if any attribute is falsy.
    pub fn from_payload(payload: &MoviePayload) -> Option<Self> {
        Some(Self {
            title: payload.title()?.to_string(),
            genre: payload.genre()?.to_string(),
            year: payload.year()?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year(&self) -> i64 {
        self.year
    }
}
