//! Search and social metadata

use super::{absolute_url, html_escape};
use crate::config::SiteConfig;
use crate::content::PostRecord;
use crate::query::PostNode;

/// Meta tags for the document head: description, canonical URL, Open Graph
/// article data, and a Twitter card.
pub fn seo_tags(
    config: &SiteConfig,
    record: &PostRecord,
    node: &PostNode,
    post_path: &str,
) -> String {
    let page_url = absolute_url(config, post_path);
    let description = if node.excerpt.is_empty() {
        &config.site_description
    } else {
        &node.excerpt
    };
    let image = record.cover.as_deref().map(|c| absolute_url(config, c));

    let mut tags = vec![
        format!(
            r#"<meta name="description" content="{}">"#,
            html_escape(description)
        ),
        format!(r#"<link rel="canonical" href="{}">"#, page_url),
        r#"<meta property="og:type" content="article">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(&record.title)
        ),
        format!(r#"<meta property="og:url" content="{}">"#, page_url),
        format!(
            r#"<meta property="og:site_name" content="{}">"#,
            html_escape(&config.site_title)
        ),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(description)
        ));
    }

    if let Some(image) = &image {
        tags.push(format!(r#"<meta property="og:image" content="{}">"#, image));
        tags.push(r#"<meta name="twitter:card" content="summary_large_image">"#.to_string());
        tags.push(format!(r#"<meta name="twitter:image" content="{}">"#, image));
    } else {
        tags.push(r#"<meta name="twitter:card" content="summary">"#.to_string());
    }

    tags.push(format!(
        r#"<meta name="twitter:title" content="{}">"#,
        html_escape(&record.title)
    ));

    tags.join("\n")
}
