//! Document model: pages and their extracted text.

mod document;
mod page;

pub use document::Document;
pub use page::Page;
