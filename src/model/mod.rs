//! Data model for span corpora and outline results.
//!
//! This module defines the intermediate representation that bridges
//! span acquisition and outline inference. The span side of the model
//! is also the JSON interchange schema accepted by the span dump
//! reader, so any text layer (PDF, XPS, OCR) that can emit it can feed
//! the pipeline.

mod outline;
mod span;

pub use outline::{Heading, HeadingLevel, OutlineResult, UNTITLED};
pub use span::{BBox, DocumentSpans, Line, PageSpans, Span};
