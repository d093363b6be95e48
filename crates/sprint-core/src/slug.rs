use regex::Regex;
use std::sync::OnceLock;

/// Filename stem used when a title contains no alphanumeric characters.
pub const EMPTY_SLUG: &str = "untitled";

static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Turn free text into a filesystem-safe identifier.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// to a single hyphen, and trims leading/trailing hyphens. Idempotent:
/// `slug(slug(x)) == slug(x)`. Text with no alphanumeric characters at all
/// maps to [`EMPTY_SLUG`].
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = non_alnum_re().replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');
    if trimmed.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
