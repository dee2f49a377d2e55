//! Post display record
//!
//! The query node carries the post as the content layer stored it. The
//! record here is the shape the page template consumes, with the display
//! identifier resolved against the route slug.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::query::PostNode;

/// A post as the page template consumes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub date: Option<String>,
    pub cover: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Author id for the directory lookup.
    pub author: Option<String>,
    /// Display identifier: the explicit front-matter id when present,
    /// otherwise the route slug.
    pub id: Option<String>,
    /// Category fallback, assigned only when the post ends up with no id.
    pub category_id: Option<String>,
    pub post_class: Option<String>,
}

impl PostRecord {
    /// Derive the display record from the query node and the route slug.
    pub fn from_node(node: &PostNode, slug: Option<&str>, default_category_id: &str) -> Self {
        let fm = &node.frontmatter;

        let id = fm.id.clone().or_else(|| slug.map(str::to_owned));

        // TODO: this fallback can only fire when the explicit id and the
        // route slug are both missing. Decide whether it should instead
        // apply whenever the front matter leaves the id unset.
        let category_id = if id.is_none() {
            Some(default_category_id.to_owned())
        } else {
            None
        };

        Self {
            title: fm.title.clone(),
            date: fm.date.clone(),
            cover: fm.cover.clone(),
            category: fm.category.clone(),
            tags: fm.tags.clone(),
            author: fm.author.clone(),
            id,
            category_id,
            post_class: fm.post_class.clone(),
        }
    }

    /// Class for the post article element.
    pub fn class_name(&self) -> &str {
        self.post_class.as_deref().unwrap_or("post")
    }
}

/// Parse a front-matter date in the formats site content actually uses.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PostFrontmatter;

    fn node(frontmatter: PostFrontmatter) -> PostNode {
        PostNode {
            content: "Body.".to_string(),
            html: String::new(),
            time_to_read: None,
            excerpt: String::new(),
            frontmatter,
            fields: Default::default(),
        }
    }

    #[test]
    fn explicit_id_wins_over_the_slug() {
        let node = node(PostFrontmatter {
            title: "T".to_string(),
            id: Some("custom-id".to_string()),
            ..Default::default()
        });

        let record = PostRecord::from_node(&node, Some("/t/"), "tech");
        assert_eq!(record.id.as_deref(), Some("custom-id"));
        assert!(record.category_id.is_none());
    }

    #[test]
    fn slug_stands_in_for_a_missing_id() {
        let node = node(PostFrontmatter {
            title: "T".to_string(),
            ..Default::default()
        });

        let record = PostRecord::from_node(&node, Some("/t/"), "tech");
        assert_eq!(record.id.as_deref(), Some("/t/"));
        assert!(record.category_id.is_none());
    }

    #[test]
    fn no_id_and_no_slug_assigns_the_default_category() {
        let node = node(PostFrontmatter {
            title: "T".to_string(),
            ..Default::default()
        });

        let record = PostRecord::from_node(&node, None, "tech");
        assert!(record.id.is_none());
        assert_eq!(record.category_id.as_deref(), Some("tech"));
    }

    #[test]
    fn class_name_defaults_to_post() {
        let plain = PostRecord::default();
        assert_eq!(plain.class_name(), "post");

        let custom = PostRecord {
            post_class: Some("post featured".to_string()),
            ..Default::default()
        };
        assert_eq!(custom.class_name(), "post featured");
    }

    #[test]
    fn parses_the_usual_date_shapes() {
        let date = parse_date("2019-01-28").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2019-01-28");

        let datetime = parse_date("2019-01-28 22:40:32").unwrap();
        assert_eq!(datetime.format("%H:%M").to_string(), "22:40");

        let iso = parse_date("2019-01-28T22:40:32.169Z").unwrap();
        assert_eq!(iso.format("%Y-%m-%d").to_string(), "2019-01-28");

        assert!(parse_date("next tuesday").is_none());
    }
}
