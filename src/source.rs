//! Span acquisition: the boundary between the pure core and whatever
//! produced the document's text layer.
//!
//! The core is agnostic to provenance - PDF decoding, OCR, anything
//! that can emit the [`DocumentSpans`](crate::model::DocumentSpans)
//! interchange shape. This crate ships a JSON span-dump reader; other
//! providers implement [`SpanSource`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::DocumentSpans;

/// A per-document provider of span corpora.
///
/// A source is scoped to one document: opened, exhaustively read once,
/// then released. Its lifetime never spans multiple documents.
pub trait SpanSource {
    /// Read the complete span corpus for the document.
    fn read_document(&mut self) -> Result<DocumentSpans>;
}

/// A span dump stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSpanFile {
    path: PathBuf,
}

impl JsonSpanFile {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpanSource for JsonSpanFile {
    fn read_document(&mut self) -> Result<DocumentSpans> {
        let file = File::open(&self.path)?;
        from_reader(BufReader::new(file))
    }
}

/// Decode a span dump from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<DocumentSpans> {
    serde_json::from_reader(reader).map_err(|e| Error::SpanDecode(e.to_string()))
}

/// Decode a span dump from a JSON string.
pub fn from_json(json: &str) -> Result<DocumentSpans> {
    serde_json::from_str(json).map_err(|e| Error::SpanDecode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "pages": [
            {
                "index": 0,
                "width": 612.0,
                "height": 792.0,
                "lines": [
                    {
                        "spans": [
                            {"text": "Hello", "size": 18.0,
                             "bbox": {"x0": 72.0, "y0": 80.0, "x1": 120.0, "y1": 98.0}}
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let doc = from_json(DUMP).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.span_count(), 1);
        assert_eq!(doc.pages[0].lines[0].spans[0].text, "Hello");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::SpanDecode(_)));
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = JsonSpanFile::new("/definitely/not/here.json");
        let err = source.read_document().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
