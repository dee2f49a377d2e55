//! Content pagination
//!
//! A post body is split on blank lines into paragraph-like segments, and the
//! page shows a fixed-size window of those segments. The window math lives
//! here together with the per-page display state.

use serde::Serialize;
use tracing::debug;

/// Page size used when the request carries no usable `l` parameter.
pub const DEFAULT_LINES_PER_PAGE: usize = 10;

/// Delay in milliseconds before the viewport scrolls back to the content
/// region after a page change.
pub const SCROLL_DELAY_MS: u64 = 200;

/// Segment boundary: one blank line between paragraphs.
pub const SEGMENT_DELIMITER: &str = "\n\n";

/// Split a cleaned body into its ordered segments.
///
/// Splitting is lossless: rejoining the segments with [`SEGMENT_DELIMITER`]
/// reproduces the input exactly. An empty body yields one empty segment.
pub fn segments(text: &str) -> Vec<&str> {
    text.split(SEGMENT_DELIMITER).collect()
}

/// Segment count of the whole cleaned body, independent of the page
/// currently shown. The pagination control sizes itself from this value, so
/// it is recomputed from the full body on every render rather than cached.
pub fn total_count(text: &str) -> usize {
    segments(text).len()
}

/// The half-open window of segments covering `page` (1-indexed).
///
/// A window never holds more than `page_size` segments, and a page past the
/// end of the body clamps to an empty window instead of failing.
pub fn page_window<'a>(segs: &'a [&'a str], page: usize, page_size: usize) -> &'a [&'a str] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= segs.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(segs.len());
    &segs[start..end]
}

/// Rejoin the window for `page` into the text the page should display.
pub fn visible_text(text: &str, page: usize, page_size: usize) -> String {
    let segs = segments(text);
    page_window(&segs, page, page_size).join(SEGMENT_DELIMITER)
}

/// Pagination state for one rendered post page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagerState {
    /// 1-indexed page currently displayed.
    pub current_page: usize,
    /// Segments shown per page. Fixed for the lifetime of the page; a new
    /// value only takes effect through a fresh page load.
    pub lines_per_page: usize,
}

impl PagerState {
    /// Initial state: first page, with the page size the request asked for.
    pub fn new(lines_per_page: usize) -> Self {
        Self {
            current_page: 1,
            lines_per_page,
        }
    }

    /// Page-change transition reported by the pagination control. The
    /// control only emits pages in `[1, total_pages]`, so the value is
    /// stored as-is.
    pub fn change_page(&mut self, page: usize) {
        debug!(from = self.current_page, to = page, "page change");
        self.current_page = page;
    }

    /// Number of pages needed to show `total` segments.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.lines_per_page.max(1))
    }
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new(DEFAULT_LINES_PER_PAGE)
    }
}
