//! # readpdf
//!
//! Extract the plain text of a PDF, page by page, and write it to a UTF-8
//! text file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use readpdf::extract::{run, ExtractConfig};
//!
//! let config = ExtractConfig::new()
//!     .with_input("document.pdf")
//!     .with_output("document.txt");
//! match run(&config) {
//!     Ok(report) => println!("{} pages", report.pages),
//!     Err(e) => eprintln!("{:?} failed: {}", e.stage(), e),
//! }
//! ```

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;

pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, is_pdf_bytes, PdfFormat};
pub use error::{Error, ExtractError, Result, Stage};
pub use extract::{run, status_line, ExtractConfig, ExtractReport};
pub use model::{Document, Page};
pub use parser::PdfParser;

use std::io::Read;
use std::path::Path;

/// Parse a PDF file and return the text of every page.
///
/// # Example
///
/// ```no_run
/// use readpdf::parse_file;
///
/// let doc = parse_file("document.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    PdfParser::open(path)?.parse()
}

/// Parse a PDF from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    PdfParser::from_bytes(data)?.parse()
}

/// Parse a PDF from a reader.
///
/// # Example
///
/// ```no_run
/// use readpdf::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.pdf").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    PdfParser::from_reader(reader)?.parse()
}

/// Extract the concatenated text of all pages of a PDF file.
///
/// # Example
///
/// ```no_run
/// let text = readpdf::extract_text("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(parse_file(path)?.plain_text())
}

/// Extract the concatenated text of all pages of an in-memory PDF.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    Ok(parse_bytes(data)?.plain_text())
}
