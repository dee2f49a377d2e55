//! Author directory
//!
//! Posts name their author by id. The directory resolves that id to a full
//! record and falls back to the site's configured default author when the
//! id has no entry, so a byline never disappears over a typo.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry in the site's author directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub bio: String,
}

/// All authors known to the site, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct AuthorDirectory {
    authors: Vec<AuthorRecord>,
}

impl AuthorDirectory {
    pub fn new(authors: Vec<AuthorRecord>) -> Self {
        Self { authors }
    }

    pub fn get(&self, id: &str) -> Option<&AuthorRecord> {
        self.authors.iter().find(|a| a.id == id)
    }

    /// Look up the requested author, falling back to the site default when
    /// the id is absent or has no entry. `None` only when the default is
    /// missing from the directory too.
    pub fn resolve(&self, requested: Option<&str>, default_id: &str) -> Option<&AuthorRecord> {
        if let Some(id) = requested {
            if let Some(author) = self.get(id) {
                return Some(author);
            }
            debug!(author = id, fallback = default_id, "author not in directory");
        }
        self.get(default_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AuthorDirectory {
        AuthorDirectory::new(vec![
            AuthorRecord {
                id: "bob".to_string(),
                name: "Bob".to_string(),
                image: "bob.jpg".to_string(),
                url: "https://bob.test".to_string(),
                bio: "Writes things.".to_string(),
            },
            AuthorRecord {
                id: "casper".to_string(),
                name: "Casper".to_string(),
                image: String::new(),
                url: String::new(),
                bio: String::new(),
            },
        ])
    }

    #[test]
    fn resolves_a_known_author() {
        let dir = directory();
        assert_eq!(dir.resolve(Some("bob"), "casper").unwrap().name, "Bob");
    }

    #[test]
    fn unknown_author_falls_back_to_the_default() {
        let dir = directory();
        assert_eq!(dir.resolve(Some("jane"), "bob").unwrap().id, "bob");
    }

    #[test]
    fn missing_author_id_falls_back_to_the_default() {
        let dir = directory();
        assert_eq!(dir.resolve(None, "casper").unwrap().id, "casper");
    }

    #[test]
    fn no_default_entry_means_no_author() {
        let dir = directory();
        assert!(dir.resolve(Some("jane"), "nobody").is_none());
        assert!(AuthorDirectory::default().resolve(Some("bob"), "bob").is_none());
    }

    #[test]
    fn records_tolerate_sparse_fields() {
        let json = r#"[{ "id": "minimal", "name": "Minimal" }]"#;
        let authors: Vec<AuthorRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(authors[0].id, "minimal");
        assert!(authors[0].bio.is_empty());
    }
}
