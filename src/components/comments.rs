//! Comment thread embed

use crate::config::SiteConfig;
use crate::content::PostRecord;

// Inline script values must not contain a closing-tag sequence.
fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("</", "<\\/")
}

/// Disqus thread for the post. Renders nothing when the site has no
/// shortname configured.
///
/// The thread is keyed by the post title, and the category fallback is
/// forwarded when the record carries one.
pub fn comment_embed(config: &SiteConfig, record: &PostRecord, page_url: &str) -> String {
    let shortname = match config.disqus_shortname.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return String::new(),
    };

    let category_line = match record.category_id.as_deref() {
        Some(category_id) => format!(
            "\n  this.page.category_id = \"{}\";",
            js_escape(category_id)
        ),
        None => String::new(),
    };

    format!(
        r#"<section class="post-comments">
<div id="disqus_thread"></div>
<script>
var disqus_config = function () {{
  this.page.url = "{}";
  this.page.identifier = "{}";
  this.page.title = "{}";{}
}};
(function () {{
  var d = document, s = d.createElement("script");
  s.src = "https://{}.disqus.com/embed.js";
  s.setAttribute("data-timestamp", +new Date());
  (d.head || d.body).appendChild(s);
}})();
</script>
<noscript>Please enable JavaScript to view the comments.</noscript>
</section>"#,
        js_escape(page_url),
        js_escape(&record.title),
        js_escape(&record.title),
        category_line,
        shortname
    )
}
