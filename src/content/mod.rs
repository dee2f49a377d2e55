//! Content module - post records and body processing

mod frontmatter;
mod markdown;
mod post;

pub use frontmatter::strip_front_matter;
pub use markdown::MarkdownRenderer;
pub use post::{parse_date, PostRecord};
