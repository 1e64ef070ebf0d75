//! Line classification and heading deduplication.

use std::collections::HashSet;

use crate::model::{Heading, HeadingLevel, Line};

use super::fonts::{size_key, HeadingLevelSet, SizeKey};
use super::OutlineOptions;

/// Classify one line against the selected heading tiers.
///
/// Spans are filtered to those with in-range size and non-empty
/// trimmed text; survivors are joined with single spaces in original
/// order. The line's dominant size is the maximum among survivors, not
/// the first span's - a numbered prefix may sit in a smaller size than
/// the label it introduces. Matching is exact equality on rounded
/// sizes; there is no tolerance band, since the histogram already
/// snapped to one-decimal granularity.
pub fn classify_line(
    line: &Line,
    page_index: usize,
    levels: &HeadingLevelSet,
    options: &OutlineOptions,
) -> Option<Heading> {
    let min = size_key(options.font_size_min);
    let max = size_key(options.font_size_max);

    let mut parts: Vec<&str> = Vec::new();
    let mut max_size: Option<SizeKey> = None;

    for span in &line.spans {
        let text = span.text.trim();
        if text.is_empty() {
            continue;
        }
        let key = size_key(span.size);
        if key < min || key > max {
            continue;
        }
        parts.push(text);
        max_size = Some(max_size.map_or(key, |m: SizeKey| m.max(key)));
    }

    let max_size = max_size?;
    let text = parts.join(" ");
    if text.chars().count() < options.min_heading_len {
        return None;
    }

    let level = if Some(max_size) == levels.h1 {
        HeadingLevel::H1
    } else if Some(max_size) == levels.h2 {
        HeadingLevel::H2
    } else if Some(max_size) == levels.h3 {
        HeadingLevel::H3
    } else {
        return None;
    };

    Some(Heading::new(level, text, options.page_number(page_index)))
}

/// Remove exact-duplicate (level, text, page) triples.
///
/// Single forward pass; first occurrence kept, relative order of
/// survivors unchanged. Idempotent.
pub fn dedup_headings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut seen: HashSet<(HeadingLevel, String, u32)> = HashSet::new();
    let mut unique = Vec::with_capacity(headings.len());

    for heading in headings {
        let key = (heading.level, heading.text.clone(), heading.page);
        if seen.insert(key) {
            unique.push(heading);
        }
    }
    unique
}
