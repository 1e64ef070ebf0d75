//! Outline inference options and configuration.

/// Options for outline inference.
///
/// An explicit value passed into the pipeline entry points, so
/// documents with different settings can be processed concurrently
/// without interference.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Minimum joined-text length (in chars) to qualify as a heading
    pub min_heading_len: usize,

    /// Lower bound of the valid span size band, in points
    pub font_size_min: f32,

    /// Upper bound of the valid span size band, in points
    pub font_size_max: f32,

    /// Fraction of first-page height defining the title top band
    pub title_top_band_frac: f32,

    /// Emit zero-based page numbers instead of one-based
    pub zero_based_pages: bool,
}

impl OutlineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum heading text length.
    pub fn with_min_heading_len(mut self, len: usize) -> Self {
        self.min_heading_len = len;
        self
    }

    /// Set the valid span size band.
    pub fn with_size_band(mut self, min: f32, max: f32) -> Self {
        self.font_size_min = min;
        self.font_size_max = max;
        self
    }

    /// Set the title top band fraction.
    pub fn with_top_band_frac(mut self, frac: f32) -> Self {
        self.title_top_band_frac = frac;
        self
    }

    /// Use zero-based page numbering in emitted headings.
    pub fn zero_based(mut self) -> Self {
        self.zero_based_pages = true;
        self
    }

    /// Transform a zero-based page index into the configured numbering.
    pub fn page_number(&self, page_index: usize) -> u32 {
        if self.zero_based_pages {
            page_index as u32
        } else {
            page_index as u32 + 1
        }
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            min_heading_len: 2,
            font_size_min: 6.0,
            font_size_max: 80.0,
            title_top_band_frac: 0.30,
            zero_based_pages: false,
        }
    }
}
