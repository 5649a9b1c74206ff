//! PDF parsing module.

mod backend;
mod pdf_parser;
mod text;

pub use backend::{decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use pdf_parser::{PageError, Pages, PdfParser};
pub use text::{collect_text, extract_page_text};
