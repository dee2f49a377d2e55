//! Navigable-request context
//!
//! The renderer never probes a global environment to find out where it is
//! running. Whoever drives a render hands over the URL the page is served
//! under, when one exists; a static build simply has none and every
//! URL-derived setting falls back to its default.

use tracing::debug;
use url::Url;

use crate::paginator::DEFAULT_LINES_PER_PAGE;

/// The URL a page is being rendered under, if any.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    url: Option<Url>,
}

impl PageRequest {
    /// A request with no navigable URL, as during an offline build.
    pub fn offline() -> Self {
        Self { url: None }
    }

    pub fn new(url: Url) -> Self {
        Self { url: Some(url) }
    }

    /// Parse a request URL, degrading to offline when it is malformed.
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) => Self::new(url),
            Err(err) => {
                debug!(url = input, error = %err, "unparseable request URL, rendering offline");
                Self::offline()
            }
        }
    }

    pub fn is_offline(&self) -> bool {
        self.url.is_none()
    }

    /// Path component of the request URL, when there is one.
    pub fn path(&self) -> Option<&str> {
        self.url.as_ref().map(Url::path)
    }

    /// First value of a query parameter.
    pub fn param(&self, key: &str) -> Option<String> {
        let url = self.url.as_ref()?;
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Page size requested through the `l` query parameter.
    ///
    /// Only a well-formed positive integer is honored. Anything else, an
    /// absent parameter, `l=abc`, `l=0`, or an offline render, falls back to
    /// [`DEFAULT_LINES_PER_PAGE`].
    pub fn lines_per_page(&self) -> usize {
        match self.param("l") {
            None => DEFAULT_LINES_PER_PAGE,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    debug!(value = %raw, "ignoring malformed l parameter");
                    DEFAULT_LINES_PER_PAGE
                }
            },
        }
    }
}
