//! Page components
//!
//! Every widget on the post page is a function from typed inputs to an HTML
//! fragment. The composer renders them up front and splices the fragments
//! into the page template, so the template itself stays structural.

mod author;
mod comments;
mod nav;
mod pagination;
mod post_meta;
mod seo;
mod share;

pub use author::{author_image, author_info};
pub use comments::comment_embed;
pub use nav::{blog_logo, menu_button};
pub use pagination::pagination;
pub use post_meta::{post_date, post_tags};
pub use seo::seo_tags;
pub use share::{post_share, subscribe_form};

use crate::config::SiteConfig;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Absolute URL on the configured site domain.
///
/// # Examples
/// ```ignore
/// absolute_url(&config, "/post/a/") // -> "https://example.com/post/a/"
/// ```
pub fn absolute_url(config: &SiteConfig, path: &str) -> String {
    let base = config.site_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
