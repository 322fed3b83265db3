//! Strips markup from guest-supplied text before it is stored.
//!
//! This is a blunt allow-nothing filter, not an HTML sanitizer: it removes
//! `<script>` blocks and anything shaped like a tag. It is sufficient only
//! because stored text is always rendered as plain text and never inserted
//! into a page as HTML.

use std::sync::LazyLock;
use regex::Regex;

static SCRIPT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub fn sanitize(text: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_RE.replace_all(text, "");
    let without_tags = TAG_RE.replace_all(&without_scripts, "");
    without_tags.trim().to_string()
}

/// Absent values stay absent.
pub fn sanitize_opt(text: Option<&str>) -> Option<String> {
    text.map(sanitize)
}
