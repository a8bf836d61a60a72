//! Reference types
//!
//! A reference is one stored snippet: a title, a free-form category, the
//! snippet body and an optional language hint. Writes go through typed
//! requests:
//! - `CreateReference`: validated when constructed, so an invalid create never
//!   reaches the store
//! - `UpdateReference`: a full replace of every mutable field
//! - `ReferenceFilter`: the optional search/category pair used when listing

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored snippet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub title: String,
    /// Free-form grouping label (no fixed taxonomy)
    pub category: String,
    /// Snippet body, may span multiple lines
    pub content: String,
    /// Language hint for highlighting, empty when unknown
    pub language: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update; never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

/// A validated request to create a reference.
///
/// Fields are private so the only way to obtain one is through
/// [`CreateReference::new`] or `TryFrom<ReferenceInput>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReference {
    title: String,
    category: String,
    content: String,
    language: String,
}

impl CreateReference {
    /// Build a create request, rejecting blank required fields.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
        language: Option<String>,
    ) -> Result<Self> {
        let title = title.into();
        let category = category.into();
        let content = content.into();

        let missing: Vec<&str> = [("title", &title), ("category", &category), ("content", &content)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            title,
            category,
            content,
            language: language.unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Loosely-populated reference fields as they arrive from a client.
///
/// Used as the JSON body for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl TryFrom<ReferenceInput> for CreateReference {
    type Error = Error;

    fn try_from(input: ReferenceInput) -> Result<Self> {
        CreateReference::new(
            input.title.unwrap_or_default(),
            input.category.unwrap_or_default(),
            input.content.unwrap_or_default(),
            input.language,
        )
    }
}

/// A full replacement of a reference's mutable fields.
///
/// Omitted fields are written as empty strings, not preserved: callers
/// must resend everything they want to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReference {
    pub title: String,
    pub category: String,
    pub content: String,
    pub language: String,
}

impl UpdateReference {
    pub fn new(
        title: Option<String>,
        category: Option<String>,
        content: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_default(),
            category: category.unwrap_or_default(),
            content: content.unwrap_or_default(),
            language: language.unwrap_or_default(),
        }
    }
}

impl From<ReferenceInput> for UpdateReference {
    fn from(input: ReferenceInput) -> Self {
        UpdateReference::new(input.title, input.category, input.content, input.language)
    }
}

/// Optional search and category constraints for listing.
///
/// Empty strings mean "no filter"; when both are set they combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceFilter {
    search: Option<String>,
    category: Option<String>,
}

impl ReferenceFilter {
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            category: category.filter(|c| !c.is_empty()),
        }
    }

    /// No constraints: every reference matches
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Case-insensitive substring matched against title or content
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Exact, case-sensitive category
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }
}
