//! Document-level types.

use super::Page;

/// A PDF document with the text of every page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        let index = page_num.checked_sub(1)?;
        self.pages.get(index as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Text of all pages concatenated in page order, without separators.
    pub fn plain_text(&self) -> String {
        self.pages.iter().map(|page| page.text.as_str()).collect()
    }
}
