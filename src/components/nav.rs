//! Site chrome: logo and menu controls

use super::html_escape;
use crate::config::SiteConfig;

/// Logo link back to the front page. Empty when the site has no logo.
pub fn blog_logo(config: &SiteConfig) -> String {
    if config.site_logo.is_empty() {
        return String::new();
    }

    format!(
        r#"<a class="blog-logo" href="/"><img src="{}" alt="{}"></a>"#,
        config.site_logo,
        html_escape(&config.site_title)
    )
}

/// Button that opens the menu drawer.
pub fn menu_button() -> String {
    r##"<a class="menu-button icon-menu" href="#menu" aria-label="Open menu"><span class="word">Menu</span></a>"##
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_links_home() {
        let config = SiteConfig {
            site_logo: "/logos/ghost.png".to_string(),
            site_title: "Ghostly Tales".to_string(),
            ..Default::default()
        };
        let html = blog_logo(&config);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("/logos/ghost.png"));
        assert!(html.contains(r#"alt="Ghostly Tales""#));
    }

    #[test]
    fn no_logo_renders_nothing() {
        let config = SiteConfig {
            site_logo: String::new(),
            ..Default::default()
        };
        assert!(blog_logo(&config).is_empty());
    }

    #[test]
    fn menu_button_is_labelled() {
        let html = menu_button();
        assert!(html.contains("menu-button"));
        assert!(html.contains("Menu"));
    }
}
