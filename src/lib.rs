//! # untoc
//!
//! Heuristic document outline inference for Rust.
//!
//! Derives a structured outline - a document title plus a three-level
//! H1/H2/H3 heading hierarchy - from the raw typographic metadata of a
//! paginated document, for indexing and navigation tools that need a
//! table of contents when the source carries none.
//!
//! ## Quick Start
//!
//! ```no_run
//! use untoc::{outline_file, OutlineOptions};
//!
//! fn main() -> untoc::Result<()> {
//!     // Read a span dump and infer its outline
//!     let result = outline_file("document.json", &OutlineOptions::default())?;
//!
//!     println!("{}", result.title);
//!     for heading in &result.outline {
//!         println!("{:?} {} (p. {})", heading.level, heading.text, heading.page);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! Observed font sizes are clustered into a histogram, the three
//! largest distinct sizes (ties broken by frequency) become the
//! heading tiers, and each line is classified by the dominant size of
//! its spans. The title comes from heading candidates on the first two
//! pages, falling back to large spans in the top band of page one.
//!
//! - **Deterministic**: pure pipeline over an in-memory span corpus
//! - **Source-agnostic**: any text layer that can emit the JSON span
//!   schema can feed it
//! - **Batch mode**: per-document isolation, parallel via Rayon

pub mod analyze;
pub mod batch;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use analyze::{
    extract_headings, extract_outline, pick_heading_levels, HeadingLevelSet, OutlineOptions,
    SizeHistogram,
};
pub use batch::{process_dir, process_one, BatchFailure, BatchSummary};
pub use error::{Error, Result};
pub use model::{BBox, DocumentSpans, Heading, HeadingLevel, Line, OutlineResult, PageSpans, Span};
pub use render::{to_json, JsonFormat};
pub use source::{JsonSpanFile, SpanSource};

use std::io::Read;
use std::path::Path;

/// Infer the outline of a span dump file.
///
/// # Example
///
/// ```no_run
/// use untoc::{outline_file, OutlineOptions};
///
/// let result = outline_file("report.json", &OutlineOptions::default()).unwrap();
/// println!("{} headings", result.outline.len());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P, options: &OutlineOptions) -> Result<OutlineResult> {
    let mut source = JsonSpanFile::new(path.as_ref());
    let doc = source.read_document()?;
    Ok(extract_outline(&doc, options))
}

/// Infer the outline of a span dump read from any reader.
pub fn outline_reader<R: Read>(reader: R, options: &OutlineOptions) -> Result<OutlineResult> {
    let doc = source::from_reader(reader)?;
    Ok(extract_outline(&doc, options))
}

/// Infer the outline of an in-memory span corpus.
///
/// Pure and infallible; equivalent to calling
/// [`analyze::extract_outline`] directly.
pub fn outline_document(doc: &DocumentSpans, options: &OutlineOptions) -> OutlineResult {
    extract_outline(doc, options)
}
