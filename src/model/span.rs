//! Span-level types: the raw typographic input to the pipeline.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a span, in page coordinates.
///
/// `y0` is the top edge in a top-down coordinate system: smaller `y0`
/// means closer to the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BBox {
    /// Create a bounding box from its four edges.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// A minimal text run sharing one font size and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Text content as emitted by the document's text layer
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Position on the page
    pub bbox: BBox,
}

impl Span {
    /// Create a new span.
    pub fn new(text: impl Into<String>, size: f32, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            size,
            bbox,
        }
    }
}

/// An ordered group of spans representing one visual line of text.
///
/// Span order is left-to-right as emitted by the source and is
/// preserved when line text is joined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Spans in reading order
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Check if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// All lines of one page, with page geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpans {
    /// Zero-based page index
    pub index: usize,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Lines in natural reading order
    pub lines: Vec<Line>,
}

impl PageSpans {
    /// Create an empty page with the given geometry.
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Iterate over all spans on the page.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }
}

/// The span corpus of one document.
///
/// Pages are ordered ascending by index; this ordering, together with
/// line order within pages, fixes the traversal order every downstream
/// tie-break depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSpans {
    /// Pages in ascending index order
    pub pages: Vec<PageSpans>,
}

impl DocumentSpans {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageSpans) {
        self.pages.push(page);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the first page, if any.
    pub fn first_page(&self) -> Option<&PageSpans> {
        self.pages.first()
    }

    /// Count all spans across all pages.
    pub fn span_count(&self) -> usize {
        self.pages.iter().map(|p| p.spans().count()).sum()
    }
}
