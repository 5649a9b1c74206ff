//! In-memory PDF fixtures built with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// Builds a PDF whose pages each show one line of text in Helvetica.
pub struct PdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    kids: Vec<Object>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self::with_encoding(None)
    }

    /// Use a named simple-font encoding such as `WinAnsiEncoding`.
    pub fn with_encoding(encoding: Option<&str>) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        };
        if let Some(encoding) = encoding {
            font.set("Encoding", Object::Name(encoding.as_bytes().to_vec()));
        }
        let font_id = doc.add_object(font);
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        Self {
            doc,
            pages_id,
            resources_id,
            kids: Vec::new(),
        }
    }

    /// Add a page showing `text` as a single line.
    pub fn page(self, text: &str) -> Self {
        self.page_bytes(text.as_bytes())
    }

    /// Add a page showing raw string bytes, decoded through the font encoding.
    pub fn page_bytes(self, bytes: &[u8]) -> Self {
        let ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(bytes.to_vec(), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ];
        self.page_ops(vec![ops])
    }

    /// Add a page without any content stream.
    pub fn blank_page(mut self) -> Self {
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => self.resources_id,
        });
        self.kids.push(page_id.into());
        self
    }

    /// Add a page whose `/Contents` array names an integer instead of a stream.
    pub fn non_stream_page(mut self) -> Self {
        let id = self.doc.add_object(Object::Integer(7));
        self.page_with_contents(vec![Object::Reference(id)].into())
    }

    /// Add a page with one content stream per entry of `streams`.
    pub fn page_ops(mut self, streams: Vec<Vec<Operation>>) -> Self {
        let mut content_ids: Vec<Object> = Vec::new();
        for operations in streams {
            let content = Content { operations };
            let data = content.encode().expect("encode content");
            let id = self.doc.add_object(Stream::new(dictionary! {}, data));
            content_ids.push(id.into());
        }
        let contents: Object = if content_ids.len() == 1 {
            content_ids.remove(0)
        } else {
            content_ids.into()
        };
        self.page_with_contents(contents)
    }

    /// Add a page whose `/Contents` entry is `contents`, as given.
    pub fn page_with_contents(mut self, contents: Object) -> Self {
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => contents,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => self.resources_id,
        });
        self.kids.push(page_id.into());
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        self.doc.save_to(&mut data).expect("save pdf");
        data
    }
}

/// A PDF with one page per entry of `texts`.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    texts
        .iter()
        .fold(PdfBuilder::new(), |builder, text| builder.page(text))
        .build()
}

/// Show `text` on its own text block at baseline `y`.
pub fn show_line(text: &str, y: i64) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}
