//! Error types for readpdf.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for readpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be decrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

/// Step of an extraction run in which a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening or loading the input document.
    Open,
    /// Extracting the text of a page.
    Read,
    /// Writing the output file.
    Write,
}

/// Failure of a whole extraction run, tagged with the stage it came from.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input could not be opened as a PDF.
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: Error,
    },

    /// A page could not be read.
    #[error("cannot read page {page}: {source}")]
    Read {
        /// 1-indexed page number
        page: u32,
        #[source]
        source: Error,
    },

    /// The output file could not be written.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// The stage this failure belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            ExtractError::Open { .. } => Stage::Open,
            ExtractError::Read { .. } => Stage::Read,
            ExtractError::Write { .. } => Stage::Write,
        }
    }
}
