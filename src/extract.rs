//! Whole-file extraction: read every page of the input and write the
//! concatenated text to the output file.
//!
//! # Example
//!
//! ```no_run
//! use readpdf::extract::{run, status_line, ExtractConfig};
//!
//! let config = ExtractConfig::new().with_input("report.pdf");
//! println!("{}", status_line(&run(&config)));
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::parser::PdfParser;

/// Input file read when no other path is given.
pub const DEFAULT_INPUT: &str = "Encomienda_Valdez_PEMBEDS_ProjectProposal_Template.pdf";

/// Output file written when no other path is given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Console line printed after a successful run.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Prefix of the console line printed after a failed run.
pub const FAILURE_PREFIX: &str = "Failed to read: ";

/// Paths used by an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// PDF file to read
    pub input: PathBuf,

    /// Text file to create or overwrite
    pub output: PathBuf,
}

impl ExtractConfig {
    /// Create a config with the default paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input PDF path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the output text path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// Number of pages read
    pub pages: u32,

    /// Bytes of UTF-8 text written
    pub bytes_written: usize,

    /// File the text was written to
    pub output: PathBuf,
}

/// Read all pages of `config.input` and write their text to `config.output`.
///
/// The output file is opened only once every page has been read, so a
/// failure to open or read the input leaves an existing output untouched.
pub fn run(config: &ExtractConfig) -> Result<ExtractReport, ExtractError> {
    let (text, pages) = read_text(&config.input)?;
    write_text(&config.output, &text)?;

    log::info!(
        "wrote {} bytes from {} pages to {}",
        text.len(),
        pages,
        config.output.display()
    );

    Ok(ExtractReport {
        pages,
        bytes_written: text.len(),
        output: config.output.clone(),
    })
}

/// Console line describing the outcome of [`run`].
pub fn status_line(result: &Result<ExtractReport, ExtractError>) -> String {
    match result {
        Ok(_) => SUCCESS_MESSAGE.to_string(),
        // The prefix keeps its trailing space and one more separates the message.
        Err(e) => format!("{} {}", FAILURE_PREFIX, e),
    }
}

fn read_text(input: &Path) -> Result<(String, u32), ExtractError> {
    let parser = PdfParser::open(input).map_err(|source| ExtractError::Open {
        path: input.to_path_buf(),
        source,
    })?;

    let mut text = String::new();
    let mut pages = 0;
    for page in parser.pages() {
        let page = page.map_err(|e| ExtractError::Read {
            page: e.number,
            source: e.source,
        })?;
        text.push_str(&page.text);
        pages += 1;
    }

    Ok((text, pages))
}

fn write_text(output: &Path, text: &str) -> Result<(), ExtractError> {
    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(output)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()
    };

    write().map_err(|source| ExtractError::Write {
        path: output.to_path_buf(),
        source,
    })
}
