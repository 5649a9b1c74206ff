//! Page-level types.

/// A single page and its extracted plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Plain text of the page; empty when the page shows no text
    pub text: String,
}

impl Page {
    /// Create a page from its number and extracted text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Check if the page has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
