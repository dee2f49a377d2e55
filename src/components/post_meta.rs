//! Byline metadata: date and tags

use super::html_escape;
use crate::content::parse_date;

/// Publication date element. Unparseable dates are shown as written rather
/// than dropped.
pub fn post_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!(
            r#"<time class="post-date" datetime="{}">{}</time>"#,
            date.format("%Y-%m-%d"),
            date.format("%B %d, %Y")
        ),
        None => format!(r#"<time class="post-date">{}</time>"#, html_escape(raw)),
    }
}

/// Tag links, each pointing at its listing page. The byline reads
/// "{date} on {tags}", so a non-empty list starts with the joining word.
pub fn post_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let links: Vec<String> = tags
        .iter()
        .map(|tag| {
            format!(
                r#"<a href="/tags/{}/">{}</a>"#,
                slug::slugify(tag),
                html_escape(tag)
            )
        })
        .collect();

    format!(
        r#" on <div class="post-tag-container">{}</div>"#,
        links.join("\n")
    )
}
