//! Pagination control
//!
//! A simple pager: previous arrow, `current / total`, next arrow. Page links
//! carry the page size so the window stays stable across navigation, and
//! they target the content region anchor so the viewport comes back to the
//! article after a change.

use crate::paginator::PagerState;

fn page_href(pager: &PagerState, page: usize) -> String {
    format!("?l={}&p={}#content", pager.lines_per_page, page)
}

/// Render the pager for `total` segments. Hidden when everything fits on
/// one page.
pub fn pagination(pager: &PagerState, total: usize) -> String {
    let pages = pager.total_pages(total).max(1);
    if pages <= 1 {
        return String::new();
    }
    let current = pager.current_page;

    let prev = if current > 1 {
        format!(
            r#"<a class="pagination-prev" href="{}" aria-label="Previous page">&#8592;</a>"#,
            page_href(pager, current - 1)
        )
    } else {
        r#"<span class="pagination-prev disabled">&#8592;</span>"#.to_string()
    };

    let next = if current < pages {
        format!(
            r#"<a class="pagination-next" href="{}" aria-label="Next page">&#8594;</a>"#,
            page_href(pager, current + 1)
        )
    } else {
        r#"<span class="pagination-next disabled">&#8594;</span>"#.to_string()
    };

    format!(
        r#"<nav class="pagination" role="navigation">
{}
<span class="pagination-simple-pager">{} / {}</span>
{}
</nav>"#,
        prev, current, pages, next
    )
}
