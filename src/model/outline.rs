//! Outline result types: the terminal artifact for one document.

use serde::{Deserialize, Serialize};

/// Title used when neither heading candidates nor first-page spans
/// yield anything.
pub const UNTITLED: &str = "Untitled Document";

/// Heading tier, assigned by exact font-size match against the
/// document's top three distinct sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Largest selected size
    H1,
    /// Second largest
    H2,
    /// Third largest
    H3,
}

/// A classified heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading tier
    pub level: HeadingLevel,

    /// Joined line text
    pub text: String,

    /// Page number under the configured numbering convention
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The inferred outline of one document.
///
/// `outline` preserves the document's natural page/line traversal
/// order. Recreated per document; carries no cross-document state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Guessed document title
    pub title: String,

    /// Deduplicated headings in traversal order
    pub outline: Vec<Heading>,
}

impl OutlineResult {
    /// Create a new result.
    pub fn new(title: impl Into<String>, outline: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// An empty result with the sentinel title.
    pub fn untitled() -> Self {
        Self::new(UNTITLED, Vec::new())
    }

    /// Check if the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of headings in the outline.
    pub fn len(&self) -> usize {
        self.outline.len()
    }
}
