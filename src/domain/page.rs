use serde::{Deserialize, Serialize};

/// Placeholder shown when a page has no stored content yet. Display only, it
/// is never persisted as page content.
pub const EMPTY_PAGE: &str = "This page is empty";

/// Result of looking a page up by name. A missing page is not an error; it
/// comes back as `found = false` with the sentinel id and content so the view
/// layer can present a fresh edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLookup {
    pub found: bool,
    pub id: i64,
    pub raw_content: String,
}

impl PageLookup {
    pub fn missing() -> Self {
        Self {
            found: false,
            id: -1,
            raw_content: EMPTY_PAGE.to_string(),
        }
    }
}
