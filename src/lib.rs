//! postpage: renders one paginated blog-post page for a static site.
//!
//! The raw post body is cleaned of front matter, split into paragraph
//! segments, and a fixed-size window of those segments is rendered as
//! markdown inside the embedded casper theme. Byline, share links,
//! comments, and neighbor cards are composed around it from the same
//! page data.

pub mod authors;
pub mod components;
pub mod config;
pub mod content;
pub mod paginator;
pub mod query;
pub mod request;
pub mod templates;

use anyhow::Result;
use tera::Context;
use tracing::{debug, info, warn};

use crate::authors::AuthorDirectory;
use crate::config::SiteConfig;
use crate::content::{strip_front_matter, MarkdownRenderer, PostRecord};
use crate::paginator::{PagerState, SCROLL_DELAY_MS};
use crate::query::{NeighborNode, PostPageData, RouteParams};
use crate::request::PageRequest;
use crate::templates::{NeighborView, PostView, ReadNextView, SiteView, TemplateRenderer};

/// Drawer state for the site menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Menu-button click: open when closed, close when open.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// One post page: immutable inputs plus the interactive display state.
pub struct PostPage {
    config: SiteConfig,
    route: RouteParams,
    data: PostPageData,
    record: PostRecord,
    authors: AuthorDirectory,
    post_path: String,
    pager: PagerState,
    menu: MenuState,
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
}

impl PostPage {
    /// Assemble a page from its query data. The request is consulted here,
    /// once; later page changes never reread it.
    pub fn new(
        config: SiteConfig,
        route: RouteParams,
        data: PostPageData,
        request: &PageRequest,
    ) -> Result<Self> {
        let record = PostRecord::from_node(
            &data.post,
            route.slug.as_deref(),
            &config.post_default_category_id,
        );

        let post_path = request
            .path()
            .map(str::to_owned)
            .or_else(|| route.slug.clone())
            .unwrap_or_else(|| "/".to_string());

        let authors = AuthorDirectory::new(data.authors.clone());
        let pager = PagerState::new(request.lines_per_page());

        // Post bodies come out of the site's own repository, so raw HTML in
        // the markdown is passed through as written.
        let markdown = MarkdownRenderer::with_options("base16-ocean.dark", true);
        let templates = TemplateRenderer::new()?;

        debug!(
            slug = route.slug.as_deref().unwrap_or(""),
            lines_per_page = pager.lines_per_page,
            "post page assembled"
        );

        Ok(Self {
            config,
            route,
            data,
            record,
            authors,
            post_path,
            pager,
            menu: MenuState::default(),
            markdown,
            templates,
        })
    }

    pub fn pager(&self) -> &PagerState {
        &self.pager
    }

    pub fn record(&self) -> &PostRecord {
        &self.record
    }

    /// Move the display window to another page.
    pub fn change_page(&mut self, page: usize) {
        self.pager.change_page(page);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Render the page as a complete HTML document.
    ///
    /// The segment total is taken from the full cleaned body on every call,
    /// never from the window, so the pager stays correct as the page moves.
    pub fn render(&self) -> Result<String> {
        let cleaned = strip_front_matter(&self.data.post.content);
        let total = paginator::total_count(cleaned);
        let visible =
            paginator::visible_text(cleaned, self.pager.current_page, self.pager.lines_per_page);
        let content_html = self.markdown.render(&visible)?;

        let page_url = components::absolute_url(&self.config, &self.post_path);

        let mut context = Context::new();
        context.insert("site", &SiteView::from(&self.config));
        context.insert(
            "page_title",
            &format!("{} | {}", self.record.title, self.config.site_title),
        );
        context.insert(
            "seo_html",
            &components::seo_tags(&self.config, &self.record, &self.data.post, &self.post_path),
        );
        context.insert("menu_open", &self.menu.is_open());
        context.insert(
            "post",
            &PostView {
                title: self.record.title.clone(),
                class_name: self.record.class_name().to_string(),
                cover: self.record.cover.clone(),
            },
        );
        context.insert("logo_html", &components::blog_logo(&self.config));
        context.insert("menu_button_html", &components::menu_button());
        context.insert(
            "post_date_html",
            &self
                .record
                .date
                .as_deref()
                .map(components::post_date)
                .unwrap_or_default(),
        );
        context.insert("post_tags_html", &components::post_tags(&self.record.tags));
        context.insert("content_html", &content_html);
        context.insert(
            "pagination_html",
            &components::pagination(&self.pager, total),
        );

        let (author_image_html, author_info_html) = match self
            .authors
            .resolve(self.record.author.as_deref(), &self.config.blog_author_id)
        {
            Some(author) => (
                components::author_image(author),
                components::author_info(author, &self.config.author_dir),
            ),
            None => (String::new(), String::new()),
        };
        context.insert("author_image_html", &author_image_html);
        context.insert("author_info_html", &author_info_html);

        context.insert(
            "share_html",
            &components::post_share(&self.record.title, &page_url),
        );
        context.insert("subscribe_html", &components::subscribe_form(&self.config));
        context.insert(
            "comments_html",
            &components::comment_embed(&self.config, &self.record, &page_url),
        );
        context.insert("read_next", &self.read_next());
        context.insert("scroll_delay_ms", &SCROLL_DELAY_MS);

        let html = self.templates.render("post.html", &context)?;
        info!(
            page = self.pager.current_page,
            pages = self.pager.total_pages(total),
            "rendered post page"
        );
        Ok(html)
    }

    fn read_next(&self) -> ReadNextView {
        ReadNextView {
            prev: neighbor_card(self.route.prev.as_deref(), self.data.prev.as_ref()),
            next: neighbor_card(self.route.next.as_deref(), self.data.next.as_ref()),
        }
    }
}

/// A card renders only when the neighbor record is actually present.
fn neighbor_card(route_slug: Option<&str>, node: Option<&NeighborNode>) -> Option<NeighborView> {
    if let (Some(slug), None) = (route_slug, node) {
        warn!(
            neighbor = slug,
            "neighbor named by the route is missing from page data"
        );
    }
    node.map(NeighborView::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authors::AuthorRecord;
    use crate::query::{NeighborFrontmatter, NodeFields, PostFrontmatter, PostNode};

    fn site_config() -> SiteConfig {
        SiteConfig {
            site_title: "Ghostly Tales".to_string(),
            site_url: "https://tales.test".to_string(),
            blog_author_id: "bob".to_string(),
            disqus_shortname: Some("ghostly-tales".to_string()),
            ..Default::default()
        }
    }

    fn page_data() -> PostPageData {
        PostPageData {
            post: PostNode {
                content: "---\ntitle: X\n---\nA\n\nB\n\nC".to_string(),
                html: String::new(),
                time_to_read: Some(1),
                excerpt: "A".to_string(),
                frontmatter: PostFrontmatter {
                    title: "Hello".to_string(),
                    cover: Some("/images/cover.jpg".to_string()),
                    date: Some("2019-01-28".to_string()),
                    tags: vec!["rust".to_string()],
                    author: Some("jane".to_string()),
                    ..Default::default()
                },
                fields: NodeFields {
                    slug: "/hello/".to_string(),
                },
            },
            next: Some(NeighborNode {
                excerpt: "Up next.".to_string(),
                frontmatter: NeighborFrontmatter {
                    title: "Next Post".to_string(),
                    cover: None,
                    date: None,
                },
                fields: NodeFields {
                    slug: "/next-post/".to_string(),
                },
            }),
            prev: None,
            authors: vec![AuthorRecord {
                id: "bob".to_string(),
                name: "Bob".to_string(),
                image: "/images/bob.jpg".to_string(),
                url: String::new(),
                bio: "Writes things.".to_string(),
            }],
        }
    }

    fn route() -> RouteParams {
        RouteParams {
            slug: Some("/hello/".to_string()),
            next: Some("/next-post/".to_string()),
            prev: None,
        }
    }

    fn page_with_request(url: &str) -> PostPage {
        PostPage::new(
            site_config(),
            route(),
            page_data(),
            &PageRequest::parse(url),
        )
        .unwrap()
    }

    #[test]
    fn renders_the_first_window_of_the_body() {
        let page = page_with_request("https://tales.test/hello/?l=2");
        let html = page.render().unwrap();

        assert!(html.contains("<title>Hello | Ghostly Tales</title>"));
        assert!(html.contains("<p>A</p>"));
        assert!(html.contains("<p>B</p>"));
        assert!(!html.contains("<p>C</p>"));
        assert!(html.contains("1 / 2"));
    }

    #[test]
    fn page_change_moves_the_window_only() {
        let mut page = page_with_request("https://tales.test/hello/?l=2");
        page.change_page(2);
        let html = page.render().unwrap();

        assert!(html.contains("<p>C</p>"));
        assert!(!html.contains("<p>A</p>"));
        assert!(html.contains("2 / 2"));
    }

    #[test]
    fn offline_render_uses_the_default_window() {
        let page = page_with_request("not a url");
        let html = page.render().unwrap();

        assert!(html.contains("<p>A</p>"));
        assert!(html.contains("<p>C</p>"));
        assert!(!html.contains("pagination-simple-pager"));
    }

    #[test]
    fn unknown_author_byline_uses_the_default() {
        let page = page_with_request("https://tales.test/hello/");
        let html = page.render().unwrap();

        assert!(html.contains("Bob"));
        assert!(html.contains("Writes things."));
    }

    #[test]
    fn neighbor_card_needs_a_record() {
        let mut data = page_data();
        data.next = None;
        let page = PostPage::new(site_config(), route(), data, &PageRequest::offline()).unwrap();
        let html = page.render().unwrap();

        assert!(!html.contains("read-next-story"));
    }

    #[test]
    fn menu_state_reaches_the_drawer() {
        let mut page = page_with_request("https://tales.test/hello/");
        assert!(!page.render().unwrap().contains("menu-open"));

        page.toggle_menu();
        assert!(page.render().unwrap().contains("menu-open"));

        page.close_menu();
        assert!(!page.render().unwrap().contains("menu-open"));
    }

    #[test]
    fn cover_and_comments_come_from_the_data() {
        let page = page_with_request("https://tales.test/hello/");
        let html = page.render().unwrap();

        assert!(html.contains("background-image: url(/images/cover.jpg)"));
        assert!(html.contains("ghostly-tales.disqus.com"));
        assert!(html.contains(r#"href="/tags/rust/""#));
    }

    #[test]
    fn no_cover_post_omits_the_header_chrome() {
        let mut data = page_data();
        data.post.frontmatter.cover = None;
        let page = PostPage::new(site_config(), route(), data, &PageRequest::offline()).unwrap();
        let html = page.render().unwrap();

        assert!(!html.contains("main-header"));
        assert!(!html.contains("menu-button"));
        assert!(html.contains(r#"id="menu""#));
    }

    #[test]
    fn pager_takes_its_page_size_from_the_request() {
        let page = page_with_request("https://tales.test/hello/?l=7");
        assert_eq!(page.pager().lines_per_page, 7);
        assert_eq!(page.pager().current_page, 1);
    }

    #[test]
    fn record_takes_its_id_from_the_route_slug() {
        let page = page_with_request("https://tales.test/hello/");
        let record = page.record();

        assert_eq!(record.id.as_deref(), Some("/hello/"));
        assert_eq!(record.class_name(), "post");
        assert!(record.category_id.is_none());
    }
}
