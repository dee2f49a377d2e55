//! Author byline widgets

use super::html_escape;
use crate::authors::AuthorRecord;

/// Author portrait for the byline. Empty when the record has no image.
pub fn author_image(author: &AuthorRecord) -> String {
    if author.image.is_empty() {
        return String::new();
    }

    format!(
        r#"<figure class="author-image"><span class="img" style="background-image: url({})"><span class="hidden">{}'s Picture</span></span></figure>"#,
        author.image,
        html_escape(&author.name)
    )
}

/// Byline block: linked name, bio, and website.
pub fn author_info(author: &AuthorRecord, author_dir: &str) -> String {
    let mut parts = vec![format!(
        r#"<h4 class="author-name"><a href="/{}/{}/">{}</a></h4>"#,
        author_dir.trim_matches('/'),
        slug::slugify(&author.id),
        html_escape(&author.name)
    )];

    if !author.bio.is_empty() {
        parts.push(format!(
            r#"<p class="author-bio">{}</p>"#,
            html_escape(&author.bio)
        ));
    }

    if !author.url.is_empty() {
        parts.push(format!(
            r#"<div class="author-meta"><span class="author-link icon-link"><a href="{}">{}</a></span></div>"#,
            author.url,
            html_escape(&author.url)
        ));
    }

    format!(r#"<section class="author">{}</section>"#, parts.join("\n"))
}
