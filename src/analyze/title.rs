//! Title guessing: heading-derived first, positional fallback second.

use crate::model::{DocumentSpans, Heading, UNTITLED};

use super::fonts::{size_key, SizeKey};
use super::OutlineOptions;

/// Minimum whitespace-separated words for a heading-derived candidate.
const MIN_TITLE_WORDS: usize = 3;

/// Derive a single title string for the document.
///
/// Stage 1 looks at classified headings on the first two document
/// pages; Stage 2 re-scans the raw spans of the first page. Both
/// stages empty (including an absent H1 tier or an unreadable first
/// page) yields the `"Untitled Document"` sentinel - never an error.
pub fn guess_title(
    doc: &DocumentSpans,
    headings: &[Heading],
    h1: Option<SizeKey>,
    options: &OutlineOptions,
) -> String {
    if let Some(title) = title_from_headings(headings, options) {
        return title;
    }
    if let Some(title) = title_from_first_page(doc, h1, options) {
        return title;
    }
    UNTITLED.to_string()
}

/// Stage 1: longest heading text on the first two pages with at least
/// three words.
///
/// "Longest by char count" is a coarse proxy for title-likeness meant
/// to skip short running headers; ties go to the first candidate in
/// traversal order, which the heading list already fixes.
fn title_from_headings(headings: &[Heading], options: &OutlineOptions) -> Option<String> {
    let first_two = [options.page_number(0), options.page_number(1)];

    let mut best: Option<&str> = None;
    for heading in headings {
        if !first_two.contains(&heading.page) {
            continue;
        }
        let text = heading.text.trim();
        if text.split_whitespace().count() < MIN_TITLE_WORDS {
            continue;
        }
        if best.map_or(true, |b| text.chars().count() > b.chars().count()) {
            best = Some(text);
        }
    }
    best.map(str::to_string)
}

/// Stage 2: H1-sized spans in the top band of the first page, read in
/// (y, x) order, text-deduplicated and space-joined.
fn title_from_first_page(
    doc: &DocumentSpans,
    h1: Option<SizeKey>,
    options: &OutlineOptions,
) -> Option<String> {
    let h1 = h1?;
    let page = doc.first_page()?;
    let top_band_y = page.height * options.title_top_band_frac;

    let mut candidates: Vec<(i64, i64, &str)> = Vec::new();
    for span in page.spans() {
        let text = span.text.trim();
        if text.is_empty() {
            continue;
        }
        if size_key(span.size) == h1 && span.bbox.y0 <= top_band_y {
            candidates.push((
                span.bbox.y0.round() as i64,
                span.bbox.x0.round() as i64,
                text,
            ));
        }
    }

    // Stable sort: spans sharing a rounded position keep reading order.
    candidates.sort_by_key(|&(y, x, _)| (y, x));

    let mut seen = std::collections::HashSet::new();
    let mut fragments = Vec::new();
    for (_, _, text) in candidates {
        if seen.insert(text) {
            fragments.push(text);
        }
    }

    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, HeadingLevel, Line, PageSpans, Span};

    fn heading(text: &str, page: u32) -> Heading {
        Heading::new(HeadingLevel::H1, text, page)
    }

    fn positioned_span(text: &str, size: f32, x: f32, y: f32) -> Span {
        Span::new(text, size, BBox::new(x, y, x + 50.0, y + size))
    }

    fn first_page_doc(spans: Vec<Span>) -> DocumentSpans {
        let mut page = PageSpans::new(0, 612.0, 792.0);
        for span in spans {
            page.add_line(Line::new(vec![span]));
        }
        let mut doc = DocumentSpans::new();
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_stage1_longest_candidate_wins() {
        let headings = vec![
            heading("A Short Running Header", 1),
            heading("The Complete Guide to Span Classification", 2),
            heading("Later Chapter With Many Words", 5),
        ];

        let title = guess_title(
            &DocumentSpans::new(),
            &headings,
            None,
            &OutlineOptions::default(),
        );
        assert_eq!(title, "The Complete Guide to Span Classification");
    }

    #[test]
    fn test_stage1_requires_three_words() {
        let headings = vec![heading("Two Words", 1), heading("One", 1)];

        // No qualifying candidate and no spans: sentinel.
        let title = guess_title(
            &DocumentSpans::new(),
            &headings,
            None,
            &OutlineOptions::default(),
        );
        assert_eq!(title, UNTITLED);
    }

    #[test]
    fn test_stage1_tie_goes_to_first() {
        let headings = vec![
            heading("Alpha Beta Gamma Delta", 1),
            heading("Zebra Yacht Xenon Wolf", 2),
        ];
        // Equal char counts: first in traversal order wins.
        assert_eq!(headings[0].text.chars().count(), headings[1].text.chars().count());

        let title = guess_title(
            &DocumentSpans::new(),
            &headings,
            None,
            &OutlineOptions::default(),
        );
        assert_eq!(title, "Alpha Beta Gamma Delta");
    }

    #[test]
    fn test_stage1_respects_zero_based_numbering() {
        let headings = vec![heading("Numbering Convention Check Title", 0)];
        let options = OutlineOptions::new().zero_based();

        let title = guess_title(&DocumentSpans::new(), &headings, None, &options);
        assert_eq!(title, "Numbering Convention Check Title");
    }

    #[test]
    fn test_stage2_band_filtered_and_position_sorted() {
        // Band cutoff is 792 * 0.30 = 237.6; "2024" at y=300 falls out.
        let doc = first_page_doc(vec![
            positioned_span("Report", 24.0, 200.0, 50.0),
            positioned_span("Annual", 24.0, 100.0, 50.0),
            positioned_span("2024", 24.0, 100.0, 300.0),
            positioned_span("footnote", 9.0, 100.0, 60.0),
        ]);

        let title = guess_title(&doc, &[], Some(size_key(24.0)), &OutlineOptions::default());
        assert_eq!(title, "Annual Report");
    }

    #[test]
    fn test_stage2_dedups_repeated_text() {
        let doc = first_page_doc(vec![
            positioned_span("Draft", 24.0, 100.0, 40.0),
            positioned_span("Draft", 24.0, 100.0, 80.0),
            positioned_span("Standard", 24.0, 100.0, 120.0),
        ]);

        let title = guess_title(&doc, &[], Some(size_key(24.0)), &OutlineOptions::default());
        assert_eq!(title, "Draft Standard");
    }

    #[test]
    fn test_stage2_absent_h1_yields_sentinel() {
        let doc = first_page_doc(vec![positioned_span("Big", 24.0, 100.0, 40.0)]);
        let title = guess_title(&doc, &[], None, &OutlineOptions::default());
        assert_eq!(title, UNTITLED);
    }

    #[test]
    fn test_stage2_missing_first_page_yields_sentinel() {
        let title = guess_title(
            &DocumentSpans::new(),
            &[],
            Some(size_key(24.0)),
            &OutlineOptions::default(),
        );
        assert_eq!(title, UNTITLED);
    }
}
