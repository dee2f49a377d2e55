//! Site configuration (config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub site_title: String,
    pub site_description: String,
    pub site_logo: String,
    pub site_url: String,
    #[serde(default)]
    pub site_navigation: Vec<NavItem>,

    // Footer
    pub copyright: String,
    pub promote_gatsby: bool,

    // Posts
    /// Category assigned to a post that ends up with no identifier at all.
    pub post_default_category_id: String,
    /// Author byline used when a post names no author, or names one the
    /// directory does not know.
    pub blog_author_id: String,
    pub author_dir: String,

    // Comments
    pub disqus_shortname: Option<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "My Blog".to_string(),
            site_description: String::new(),
            site_logo: "/logos/logo.png".to_string(),
            site_url: "http://example.com".to_string(),
            site_navigation: Vec::new(),

            copyright: String::new(),
            promote_gatsby: true,

            post_default_category_id: "uncategorized".to_string(),
            blog_author_id: String::new(),
            author_dir: "author".to_string(),

            disqus_shortname: None,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// One entry in the site menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub path: String,
}
