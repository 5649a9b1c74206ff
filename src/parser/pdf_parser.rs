//! PDF document parser using lopdf.

use std::collections::btree_map;
use std::io::Read;
use std::path::Path;

use thiserror::Error as ThisError;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Page};

use super::backend::{LopdfBackend, PageId, PdfBackend};
use super::text::extract_page_text;

/// An opened PDF document, read page by page.
pub struct PdfParser {
    backend: LopdfBackend,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = detect_format_from_path(path)?;
        log::debug!("opening {} ({})", path.display(), format);
        Ok(Self::from_backend(LopdfBackend::load_file(path)?))
    }

    /// Open a PDF held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Ok(Self::from_backend(LopdfBackend::load_bytes(data)?))
    }

    /// Open a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_backend(backend: LopdfBackend) -> Self {
        // lopdf only decrypts documents that open with the empty password.
        if backend.is_encrypted() {
            log::warn!("document is encrypted; extracted text may be unreadable");
        }
        Self { backend }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.backend.pages().len() as u32
    }

    /// PDF version from the document header.
    pub fn version(&self) -> String {
        self.backend.version()
    }

    /// Whether the document declares encryption.
    pub fn is_encrypted(&self) -> bool {
        self.backend.is_encrypted()
    }

    /// Lazily extract pages in document order.
    ///
    /// Each call to `next` extracts one page; a failing page yields an error
    /// and iteration may continue with the following page.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            backend: &self.backend,
            ids: self.backend.pages().into_iter(),
        }
    }

    /// Extract every page into a [`Document`].
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();
        for page in self.pages() {
            document.add_page(page?);
        }
        Ok(document)
    }
}

/// Forward-only iterator over the pages of a [`PdfParser`].
pub struct Pages<'a> {
    backend: &'a LopdfBackend,
    ids: btree_map::IntoIter<u32, PageId>,
}

impl Iterator for Pages<'_> {
    type Item = std::result::Result<Page, PageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (number, id) = self.ids.next()?;
        log::debug!("extracting page {} (object {} {})", number, id.0, id.1);
        Some(
            extract_page_text(self.backend, id)
                .map(|text| Page::new(number, text))
                .map_err(|source| PageError { number, source }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

/// Failure to extract a single page.
#[derive(ThisError, Debug)]
#[error("page {number}: {source}")]
pub struct PageError {
    /// 1-indexed page number
    pub number: u32,
    pub source: Error,
}

impl From<PageError> for Error {
    fn from(err: PageError) -> Self {
        err.source
    }
}
