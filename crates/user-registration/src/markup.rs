//! Script-injection screening shared by free-text validators.
//!
//! This is a defensive input filter, not a sanitiser: it rejects values that
//! look like HTML tags, `javascript:` URIs, or inline event handlers.

use std::sync::OnceLock;

use regex::Regex;

static MARKUP_PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();

fn markup_patterns() -> &'static [Regex; 3] {
    MARKUP_PATTERNS.get_or_init(|| {
        [r"<[^>]*>", r"(?i)javascript:", r"(?i)on[a-z0-9_]+\s*="].map(|pattern| {
            Regex::new(pattern)
                .unwrap_or_else(|error| panic!("markup pattern {pattern} failed to compile: {error}"))
        })
    })
}

/// Returns `true` when `value` contains an HTML tag, a `javascript:` scheme,
/// or an `on<word>=` inline handler.
///
/// # Examples
/// ```
/// use user_registration::contains_script_markup;
///
/// assert!(contains_script_markup("<script>alert(1)</script>"));
/// assert!(contains_script_markup("JavaScript:void(0)"));
/// assert!(contains_script_markup("x onerror = y"));
/// assert!(!contains_script_markup("Jean-Pierre"));
/// ```
#[must_use]
pub fn contains_script_markup(value: &str) -> bool {
    markup_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<b>")]
    #[case("<>")]
    #[case("name<img src=x>")]
    #[case("javascript:alert(1)")]
    #[case("JAVASCRIPT:")]
    #[case("onload=boom")]
    #[case("OnClick  =go")]
    fn flags_markup(#[case] value: &str) {
        assert!(contains_script_markup(value));
    }

    #[rstest]
    #[case("O'Brien")]
    #[case("a < b")]
    #[case("java script")]
    #[case("Simone")]
    #[case("on=")]
    fn passes_plain_text(#[case] value: &str) {
        assert!(!contains_script_markup(value));
    }
}
