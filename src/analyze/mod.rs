//! Outline inference core.
//!
//! A pure, single-threaded pipeline over one document's span corpus:
//! size histogram, tier selection, line classification, deduplication,
//! title guessing. Deterministic for identical input; no shared state
//! across documents.

mod classify;
mod fonts;
mod options;
mod title;

pub use classify::{classify_line, dedup_headings};
pub use fonts::{
    key_to_points, pick_heading_levels, size_key, HeadingLevelSet, SizeHistogram, SizeKey,
};
pub use options::OutlineOptions;
pub use title::guess_title;

use crate::model::{DocumentSpans, Heading, OutlineResult};

/// Infer the outline of one document.
///
/// Runs the full pipeline and packages `{title, outline}`. Infallible:
/// a document with no qualifying spans produces an empty outline and
/// the sentinel title.
pub fn extract_outline(doc: &DocumentSpans, options: &OutlineOptions) -> OutlineResult {
    let histogram = SizeHistogram::collect(doc, options);
    let levels = pick_heading_levels(&histogram);

    let headings = extract_headings(doc, &levels, options);
    let title = guess_title(doc, &headings, levels.h1, options);

    OutlineResult::new(title, headings)
}

/// Classify every line of the document and deduplicate the result.
///
/// Traversal is page ascending, then line order within each page; the
/// deduplicator preserves that order among survivors.
pub fn extract_headings(
    doc: &DocumentSpans,
    levels: &HeadingLevelSet,
    options: &OutlineOptions,
) -> Vec<Heading> {
    let mut headings = Vec::new();
    for page in &doc.pages {
        for line in &page.lines {
            if let Some(heading) = classify_line(line, page.index, levels, options) {
                headings.push(heading);
            }
        }
    }
    dedup_headings(headings)
}
