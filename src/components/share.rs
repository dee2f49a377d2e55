//! Share links and the subscribe form

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::html_escape;
use crate::config::SiteConfig;

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Share links for the usual networks, with the title and page URL encoded
/// into each intent.
pub fn post_share(title: &str, page_url: &str) -> String {
    let title = encode(title);
    let url = encode(page_url);

    format!(
        r#"<section class="share">
<h4>Share this post</h4>
<a class="icon-twitter" href="https://twitter.com/intent/tweet?text={}&amp;url={}" target="_blank" rel="noopener"><span class="hidden">Twitter</span></a>
<a class="icon-facebook" href="https://www.facebook.com/sharer/sharer.php?u={}" target="_blank" rel="noopener"><span class="hidden">Facebook</span></a>
<a class="icon-linkedin" href="https://www.linkedin.com/shareArticle?mini=true&amp;url={}&amp;title={}" target="_blank" rel="noopener"><span class="hidden">LinkedIn</span></a>
</section>"#,
        title, url, url, url, title
    )
}

/// Subscribe form posting to the site's subscribe endpoint.
pub fn subscribe_form(config: &SiteConfig) -> String {
    format!(
        r#"<section class="subscribe-form">
<h3 class="subscribe-form-title">Subscribe to {}</h3>
<form method="post" action="{}/subscribe/">
<input class="subscribe-email" type="email" name="email" placeholder="youremail@example.com">
<button type="submit"><span>Subscribe</span></button>
</form>
</section>"#,
        html_escape(&config.site_title),
        config.site_url.trim_end_matches('/')
    )
}
