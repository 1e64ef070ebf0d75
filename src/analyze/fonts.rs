//! Font size statistics: histogram collection and heading tier selection.

use std::collections::HashMap;

use crate::model::DocumentSpans;

use super::OutlineOptions;

/// A font size rounded to one decimal, stored in tenths of a point.
///
/// Every size comparison in the pipeline goes through this key, so the
/// same rounding applies at histogram build, tier selection, and line
/// classification. Integer keys also give exact Eq/Ord/Hash, which
/// f32 keys would not.
pub type SizeKey = i32;

/// Round a raw span size to its one-decimal key.
pub fn size_key(size: f32) -> SizeKey {
    (size * 10.0).round() as SizeKey
}

/// Format a size key back as points, for display.
pub fn key_to_points(key: SizeKey) -> f32 {
    key as f32 / 10.0
}

/// Occurrence counts of rounded font sizes, built once per document.
#[derive(Debug, Clone, Default)]
pub struct SizeHistogram {
    counts: HashMap<SizeKey, usize>,
}

impl SizeHistogram {
    /// Scan all spans of a document and count in-range rounded sizes.
    ///
    /// Out-of-range spans are invisible: they are excluded here and by
    /// the classifier alike.
    pub fn collect(doc: &DocumentSpans, options: &OutlineOptions) -> Self {
        let min = size_key(options.font_size_min);
        let max = size_key(options.font_size_max);

        let mut counts = HashMap::new();
        for page in &doc.pages {
            for span in page.spans() {
                let key = size_key(span.size);
                if key >= min && key <= max {
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    /// Check if no qualifying sizes were observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct sizes observed.
    pub fn distinct_sizes(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count for a size key.
    pub fn count(&self, key: SizeKey) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    fn entries(&self) -> impl Iterator<Item = (SizeKey, usize)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }
}

/// The up-to-three sizes selected as heading tiers, largest first.
///
/// Assigned once per document and read-only thereafter. A tier is
/// `None` only when the document has fewer distinct qualifying sizes
/// than tiers; an absent tier matches no line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingLevelSet {
    /// H1 size key
    pub h1: Option<SizeKey>,
    /// H2 size key
    pub h2: Option<SizeKey>,
    /// H3 size key
    pub h3: Option<SizeKey>,
}

impl HeadingLevelSet {
    /// Check if no tier was assigned.
    pub fn is_empty(&self) -> bool {
        self.h1.is_none() && self.h2.is_none() && self.h3.is_none()
    }
}

/// Decide which font sizes correspond to H1, H2, H3.
///
/// Distinct sizes are ranked by (size descending, frequency
/// descending) and the first three become the tiers. The largest sizes
/// are assumed to mark the most prominent structure; a pure-frequency
/// ranking would promote body text instead.
pub fn pick_heading_levels(histogram: &SizeHistogram) -> HeadingLevelSet {
    if histogram.is_empty() {
        return HeadingLevelSet::default();
    }

    let mut ranked: Vec<(SizeKey, usize)> = histogram.entries().collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    HeadingLevelSet {
        h1: ranked.first().map(|(k, _)| *k),
        h2: ranked.get(1).map(|(k, _)| *k),
        h3: ranked.get(2).map(|(k, _)| *k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, Line, PageSpans, Span};

    fn span(text: &str, size: f32) -> Span {
        Span::new(text, size, BBox::new(0.0, 0.0, 10.0, 10.0))
    }

    fn doc_with_sizes(sizes: &[f32]) -> DocumentSpans {
        let mut page = PageSpans::new(0, 612.0, 792.0);
        for (i, &size) in sizes.iter().enumerate() {
            page.add_line(Line::new(vec![span(&format!("t{i}"), size)]));
        }
        let mut doc = DocumentSpans::new();
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_size_key_rounding() {
        assert_eq!(size_key(12.0), 120);
        assert_eq!(size_key(11.96), 120);
        assert_eq!(size_key(12.04), 120);
        assert_eq!(size_key(11.94), 119);
        assert_eq!(key_to_points(120), 12.0);
    }

    #[test]
    fn test_collect_filters_out_of_range() {
        let doc = doc_with_sizes(&[12.0, 4.0, 90.0, 12.0]);
        let hist = SizeHistogram::collect(&doc, &OutlineOptions::default());

        assert_eq!(hist.distinct_sizes(), 1);
        assert_eq!(hist.count(size_key(12.0)), 2);
        assert_eq!(hist.count(size_key(4.0)), 0);
        assert_eq!(hist.count(size_key(90.0)), 0);
    }

    #[test]
    fn test_collect_empty_document() {
        let hist = SizeHistogram::collect(&DocumentSpans::new(), &OutlineOptions::default());
        assert!(hist.is_empty());
    }

    #[test]
    fn test_pick_levels_size_desc_overrides_frequency() {
        // 10.0 is most frequent but smallest; 18.0 rarest but largest.
        let mut sizes = vec![18.0, 18.0];
        sizes.extend(std::iter::repeat(12.0).take(5));
        sizes.extend(std::iter::repeat(10.0).take(9));
        let doc = doc_with_sizes(&sizes);

        let levels = pick_heading_levels(&SizeHistogram::collect(&doc, &OutlineOptions::default()));
        assert_eq!(levels.h1, Some(size_key(18.0)));
        assert_eq!(levels.h2, Some(size_key(12.0)));
        assert_eq!(levels.h3, Some(size_key(10.0)));
    }

    #[test]
    fn test_pick_levels_fewer_than_three_sizes() {
        let doc = doc_with_sizes(&[14.0, 14.0, 11.0]);
        let levels = pick_heading_levels(&SizeHistogram::collect(&doc, &OutlineOptions::default()));

        assert_eq!(levels.h1, Some(size_key(14.0)));
        assert_eq!(levels.h2, Some(size_key(11.0)));
        assert_eq!(levels.h3, None);
    }

    #[test]
    fn test_pick_levels_empty_histogram() {
        let levels = pick_heading_levels(&SizeHistogram::default());
        assert!(levels.is_empty());
    }

    #[test]
    fn test_pick_levels_at_most_distinct() {
        let doc = doc_with_sizes(&[14.0]);
        let hist = SizeHistogram::collect(&doc, &OutlineOptions::default());
        let levels = pick_heading_levels(&hist);

        let assigned = [levels.h1, levels.h2, levels.h3]
            .iter()
            .filter(|t| t.is_some())
            .count();
        assert_eq!(assigned, hist.distinct_sizes());
    }
}
