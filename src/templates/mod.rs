//! Embedded casper theme templates using the Tera template engine
//!
//! The post page ships its theme inside the binary. Components arrive in
//! the context as pre-rendered fragments; the templates only contribute
//! document structure, loops, and conditionals.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::config::{NavItem, SiteConfig};
use crate::query::{NeighborNode, NEIGHBOR_EXCERPT_LENGTH};

/// Errors from the template subsystem.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to register embedded templates: {0}")]
    Register(#[source] tera::Error),

    #[error("failed to render `{name}`: {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// Template renderer with the embedded casper theme.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all casper templates loaded.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();

        // Components hand over finished HTML, so nothing in the context may
        // be escaped a second time.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("casper/layout.html")),
            ("post.html", include_str!("casper/post.html")),
            (
                "partials/navigation.html",
                include_str!("casper/partials/navigation.html"),
            ),
            (
                "partials/header.html",
                include_str!("casper/partials/header.html"),
            ),
            (
                "partials/read_next.html",
                include_str!("casper/partials/read_next.html"),
            ),
            (
                "partials/footer.html",
                include_str!("casper/partials/footer.html"),
            ),
        ])
        .map_err(RenderError::Register)?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, RenderError> {
        self.tera
            .render(template_name, context)
            .map_err(|source| RenderError::Render {
                name: template_name.to_string(),
                source,
            })
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub title: String,
    pub description: String,
    pub logo: String,
    pub url: String,
    pub navigation: Vec<NavItem>,
    pub copyright: String,
    pub promote_gatsby: bool,
}

impl From<&SiteConfig> for SiteView {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.site_title.clone(),
            description: config.site_description.clone(),
            logo: config.site_logo.clone(),
            url: config.site_url.trim_end_matches('/').to_string(),
            navigation: config.site_navigation.clone(),
            copyright: config.copyright.clone(),
            promote_gatsby: config.promote_gatsby,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub class_name: String,
    pub cover: Option<String>,
}

/// One neighbor card under the post.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborView {
    pub path: String,
    pub title: String,
    pub cover: Option<String>,
    pub excerpt: String,
}

impl From<&NeighborNode> for NeighborView {
    fn from(node: &NeighborNode) -> Self {
        Self {
            path: node.fields.slug.clone(),
            title: node.frontmatter.title.clone(),
            cover: node.frontmatter.cover.clone(),
            excerpt: crate::components::truncate(&node.excerpt, NEIGHBOR_EXCERPT_LENGTH, None),
        }
    }
}

/// Both neighbor cards. A side with no stored record renders nothing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReadNextView {
    pub prev: Option<NeighborView>,
    pub next: Option<NeighborView>,
}
