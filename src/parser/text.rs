//! Plain-text extraction from a page's content stream.
//!
//! Shown strings (`Tj`, `TJ`, `'`, `"`) are decoded with the active font and
//! collected into lines. A line ends on `T*`, `'` and `"`, or when text is
//! shown on a different baseline than the rest of the line (after `Td`, `TD`
//! or `Tm`). Runs on the same baseline join one line even across `BT`/`ET`
//! blocks. Each non-empty line is terminated with `\n`.

use crate::error::Result;

use super::backend::{ContentOp, PageId, PdfBackend, PdfValue};

/// `TJ` adjustments beyond this (in 1/1000 em, moving right) count as a word gap.
const SPACE_THRESHOLD: f32 = 200.0;

/// Extract the plain text of one page.
pub fn extract_page_text<B: PdfBackend + ?Sized>(backend: &B, page: PageId) -> Result<String> {
    let content = backend.page_content(page)?;
    if content.is_empty() {
        return Ok(String::new());
    }

    let ops = backend.decode_content(&content)?;
    Ok(collect_text(&ops, |font, bytes| {
        backend.decode_text(page, font, bytes)
    }))
}

/// Run the text operators in `ops`, decoding shown strings with `decode(font, bytes)`.
pub fn collect_text<F>(ops: &[ContentOp], decode: F) -> String
where
    F: Fn(&[u8], &[u8]) -> String,
{
    let mut collector = TextCollector::new(decode);
    for op in ops {
        collector.apply(op);
    }
    collector.finish()
}

struct TextCollector<F> {
    decode: F,
    out: String,
    line: String,
    font: Vec<u8>,
    in_text_block: bool,
    /// Vertical position of the current text line matrix
    baseline: f32,
    /// Baseline of the text already in `line`
    line_baseline: Option<f32>,
}

impl<F> TextCollector<F>
where
    F: Fn(&[u8], &[u8]) -> String,
{
    fn new(decode: F) -> Self {
        Self {
            decode,
            out: String::new(),
            line: String::new(),
            font: Vec::new(),
            in_text_block: false,
            baseline: 0.0,
            line_baseline: None,
        }
    }

    fn apply(&mut self, op: &ContentOp) {
        let operands = &op.operands;
        match op.operator.as_str() {
            "BT" => {
                self.in_text_block = true;
                self.baseline = 0.0;
            }
            "ET" => self.in_text_block = false,
            "Tf" => {
                if let Some(PdfValue::Name(name)) = operands.first() {
                    self.font = name.clone();
                }
            }
            "Td" | "TD" => {
                let ty = operands.get(1).and_then(PdfValue::as_number).unwrap_or(0.0);
                self.baseline += ty;
            }
            "Tm" => {
                if let Some(f) = operands.get(5).and_then(PdfValue::as_number) {
                    self.baseline = f;
                }
            }
            "T*" => self.end_line(),
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = operands.first() {
                    self.show(bytes);
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = operands.first() {
                    self.show_array(items);
                }
            }
            "'" => {
                self.end_line();
                if let Some(PdfValue::Str(bytes)) = operands.first() {
                    self.show(bytes);
                }
            }
            "\"" => {
                self.end_line();
                if let Some(PdfValue::Str(bytes)) = operands.get(2) {
                    self.show(bytes);
                }
            }
            _ => {}
        }
    }

    fn show(&mut self, bytes: &[u8]) {
        if !self.in_text_block {
            return;
        }
        if self.line_baseline.is_some_and(|y| y != self.baseline) {
            self.end_line();
        }
        let text = (self.decode)(&self.font, bytes);
        self.line.push_str(&text);
        self.line_baseline = Some(self.baseline);
    }

    fn show_array(&mut self, items: &[PdfValue]) {
        if !self.in_text_block {
            return;
        }
        for item in items {
            match item {
                PdfValue::Str(bytes) => self.show(bytes),
                PdfValue::Integer(_) | PdfValue::Real(_) => {
                    // Negative adjustments move the next glyph to the right.
                    let adjustment = -item.as_number().unwrap_or(0.0);
                    if adjustment > SPACE_THRESHOLD && self.wants_space() {
                        self.line.push(' ');
                    }
                }
                _ => {}
            }
        }
    }

    fn wants_space(&self) -> bool {
        match self.line.chars().last() {
            Some(c) => c != ' ' && c != '\u{00A0}' && !is_spaceless_script_char(c),
            None => false,
        }
    }

    fn end_line(&mut self) {
        if !self.line.is_empty() {
            self.out.push_str(&self.line);
            self.out.push('\n');
            self.line.clear();
        }
        self.line_baseline = None;
    }

    fn finish(mut self) -> String {
        self.end_line();
        self.out
    }
}

/// Characters of scripts written without spaces between words.
/// Hangul is excluded: Korean uses word spaces.
fn is_spaceless_script_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF       // CJK Unified Ideographs
        | 0x3400..=0x4DBF     // Extension A
        | 0x20000..=0x2EBEF   // Extensions B-F
        | 0x3040..=0x309F     // Hiragana
        | 0x30A0..=0x30FF     // Katakana
        | 0x3000..=0x303F     // CJK Symbols and Punctuation
    )
}
