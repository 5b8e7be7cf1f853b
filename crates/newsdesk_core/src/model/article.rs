//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical article record stored by the registry.
//! - Normalize inputs at construction: parsed calendar day, de-duplicated
//!   tag set, verbatim text fields.
//!
//! # Invariants
//! - `id` is stable and never reused for another article.
//! - `tags` holds no duplicates; callers must not rely on supply order.
//! - `date` is always a valid calendar day; the wire form is `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every article in the registry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = i64;

/// The only date format the registry accepts, on the wire and in queries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation error raised while normalizing article inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    /// Date text is not a valid `YYYY-MM-DD` calendar day.
    InvalidDate { value: String },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { value } => {
                write!(f, "invalid article date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for ArticleValidationError {}

/// Parses a `YYYY-MM-DD` day at construction and query boundaries.
///
/// Matching is by parsed day value, never by date-text comparison, so a
/// malformed or differently formatted input fails here instead of
/// silently matching nothing later.
pub fn parse_day(value: &str) -> Result<NaiveDate, ArticleValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ArticleValidationError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Canonical article record.
///
/// Immutable after construction; the registry only ever appends articles.
/// The serde field names are the stable wire schema (`id`, `title`,
/// `date`, `body`, `tags`) independent of internal layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Registry identity key. Decoding accepts a JSON number or a numeric
    /// string, matching known producers of the payload.
    #[serde(deserialize_with = "id_from_number_or_text")]
    pub id: ArticleId,
    /// Opaque headline text, stored verbatim.
    pub title: String,
    /// Publication day. Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Opaque body text, stored verbatim.
    pub body: String,
    /// De-duplicated tag set; decoding a list collapses repeats.
    pub tags: BTreeSet<String>,
}

impl Article {
    /// Builds a normalized article from raw inputs.
    ///
    /// # Contract
    /// - `date_text` must be a valid `YYYY-MM-DD` day; anything else fails
    ///   with [`ArticleValidationError::InvalidDate`].
    /// - Duplicate tags in the input collapse to one entry.
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        date_text: &str,
        body: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ArticleValidationError> {
        Ok(Self {
            id,
            title: title.into(),
            date: parse_day(date_text)?,
            body: body.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns whether this article carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

fn id_from_number_or_text<'de, D>(deserializer: D) -> Result<ArticleId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(id) => Ok(id),
        NumberOrText::Text(text) => text.trim().parse::<ArticleId>().map_err(|_| {
            serde::de::Error::custom(format!("article id `{text}` is not an integer"))
        }),
    }
}
