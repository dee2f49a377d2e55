//! Page data contract
//!
//! One post page is fed by a single query against the site's content layer:
//! the post itself, its chronological neighbors, and the author directory.
//! The shapes here mirror that contract field for field; drivers materialize
//! them from JSON emitted by the site's build step.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::authors::AuthorRecord;

/// Length the query layer prunes neighbor summaries to.
pub const NEIGHBOR_EXCERPT_LENGTH: usize = 112;

/// Route-level inputs identifying the post and its chronological neighbors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteParams {
    /// Slug the page is generated under.
    pub slug: Option<String>,
    /// Slug of the next (newer) post, when one exists.
    pub next: Option<String>,
    /// Slug of the previous (older) post, when one exists.
    pub prev: Option<String>,
}

/// Everything one post page renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPageData {
    pub post: PostNode,
    #[serde(default)]
    pub next: Option<NeighborNode>,
    #[serde(default)]
    pub prev: Option<NeighborNode>,
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
}

impl PostPageData {
    /// Load page data from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page data: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse page data: {}", path.display()))
    }
}

/// The post being displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostNode {
    /// Raw body text, front matter still attached.
    pub content: String,
    /// Body pre-rendered by the content layer. Part of the contract, but
    /// display goes through the paginated renderer instead.
    #[serde(default)]
    pub html: String,
    #[serde(default, rename = "timeToRead")]
    pub time_to_read: Option<u32>,
    #[serde(default)]
    pub excerpt: String,
    pub frontmatter: PostFrontmatter,
    #[serde(default)]
    pub fields: NodeFields,
}

/// Structured front-matter fields delivered alongside the raw body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFrontmatter {
    pub title: String,
    pub cover: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    /// Author id, resolved against the author directory at render time.
    pub author: Option<String>,
    /// Explicit post id. Nearly always absent; the slug stands in for it.
    pub id: Option<String>,
    /// Extra class for the post article element.
    pub post_class: Option<String>,
}

/// Fields the content layer computes on top of the author's front matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFields {
    pub slug: String,
}

/// Chronological neighbor of the displayed post, pruned to card size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborNode {
    /// Summary pruned to [`NEIGHBOR_EXCERPT_LENGTH`] characters upstream.
    #[serde(default)]
    pub excerpt: String,
    pub frontmatter: NeighborFrontmatter,
    #[serde(default)]
    pub fields: NodeFields,
}

/// Front-matter subset a neighbor card needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborFrontmatter {
    pub title: String,
    pub cover: Option<String>,
    pub date: Option<String>,
}

/// Accept a single string, a list of strings, or nothing at all.
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
