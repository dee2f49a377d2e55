//! Front-matter stripping
//!
//! Raw post bodies arrive from the query layer with their metadata block
//! still attached, while the structured fields travel separately. The only
//! job here is to drop the leading block so the body can be segmented.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // An opening `---` fence, a run of non-empty lines, and the first
    // closing `---` fence. A blank line ends the run, and only a block at
    // the very start of the text counts.
    static ref FRONT_MATTER: Regex = Regex::new(r"^-{3}\n(?:.+\n)*?-{3}\n").unwrap();
}

/// Strip a single leading front-matter block from a raw post body.
///
/// Text without such a block passes through unchanged, which also makes the
/// operation idempotent: once the block is gone, a second call finds nothing
/// to strip. Fences later in the text (horizontal rules, embedded examples)
/// are never touched.
pub fn strip_front_matter(raw: &str) -> &str {
    match FRONT_MATTER.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_block() {
        let raw = "---\ntitle: X\ncover: cover.jpg\n---\nFirst paragraph.";
        assert_eq!(strip_front_matter(raw), "First paragraph.");
    }

    #[test]
    fn passes_through_without_block() {
        let raw = "Just a body.\n\nSecond paragraph.";
        assert_eq!(strip_front_matter(raw), raw);
        assert_eq!(strip_front_matter(""), "");
    }

    #[test]
    fn idempotent_after_first_strip() {
        let raw = "---\ntitle: X\n---\nA\n\nB\n\nC";
        let once = strip_front_matter(raw);
        assert_eq!(once, "A\n\nB\n\nC");
        assert_eq!(strip_front_matter(once), once);
    }

    #[test]
    fn ignores_fences_later_in_the_text() {
        let raw = "Intro paragraph.\n\n---\nnot: metadata\n---\nMore text.";
        assert_eq!(strip_front_matter(raw), raw);
    }

    #[test]
    fn blank_line_interrupts_the_block() {
        let raw = "---\ntitle: X\n\n---\nBody";
        assert_eq!(strip_front_matter(raw), raw);
    }

    #[test]
    fn stops_at_the_first_closing_fence() {
        let raw = "---\na: 1\n---\nb: 2\n---\nBody";
        assert_eq!(strip_front_matter(raw), "b: 2\n---\nBody");
    }

    #[test]
    fn unterminated_block_passes_through() {
        let raw = "---\ntitle: X\nno closing fence";
        assert_eq!(strip_front_matter(raw), raw);
    }
}
