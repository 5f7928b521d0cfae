use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title used when a block arrives without one.
pub const DEFAULT_TITLE: &str = "Recommendation";

/// One narrative recommendation block shown under the catalog.
///
/// `content` is author-controlled markup that the frontend renders verbatim.
/// It is the single place where dataset text bypasses escaping, so it must
/// only ever be fed from the curated data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub content: String,
}

impl Recommendation {
    /// Build one block from a raw dataset entry. Unlike species fields the
    /// content is passed through untouched; only a missing or empty title
    /// gets the default.
    pub fn from_raw(raw: &Value) -> Recommendation {
        Recommendation {
            title: match raw.get("title") {
                Some(Value::String(title)) if !title.is_empty() => title.clone(),
                _ => DEFAULT_TITLE.to_string(),
            },
            content: match raw.get("content") {
                Some(Value::String(content)) => content.clone(),
                _ => String::new(),
            },
        }
    }
}
