//! # Input Sanitization
//!
//! Best-effort defense-in-depth filters for untrusted user input: the
//! free-text search box and URL query parameters.
//!
//! These are display-context filters, not a security boundary for contexts
//! that evaluate markup. They never fail; worst case they return an empty
//! or truncated string.

use crate::primitives::{MAX_PARAM_VALUE_LENGTH, MAX_SEARCH_INPUT_LENGTH};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Tag-like runs, `<...>` up to the first closing bracket. Deliberately not
/// an HTML parser.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern must compile"));

/// The `javascript:` scheme prefix, case-insensitive.
static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("scheme pattern must compile"));

/// `on<word>=` event-handler attribute patterns, case-insensitive.
static HANDLER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+=").expect("handler pattern must compile"));

/// Keys that survive URL parameter validation.
static PARAM_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("param key pattern must compile"));

// =============================================================================
// SEARCH INPUT SANITIZER
// =============================================================================

/// Sanitize raw search input for interpolation into a non-executing display
/// context.
///
/// Pass order is fixed: strip tag-like runs, drop remaining angle brackets,
/// remove the `javascript:` scheme, remove `on<word>=` handler patterns,
/// truncate to [`MAX_SEARCH_INPUT_LENGTH`] characters, trim surrounding
/// whitespace.
#[must_use]
pub fn sanitize_search_input(raw: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(raw, "");
    let without_brackets = without_tags.replace(['<', '>'], "");
    let without_scheme = SCHEME_PATTERN.replace_all(&without_brackets, "");
    let without_handlers = HANDLER_PATTERN.replace_all(&without_scheme, "");

    let truncated: String = without_handlers
        .chars()
        .take(MAX_SEARCH_INPUT_LENGTH)
        .collect();
    truncated.trim().to_string()
}

// =============================================================================
// URL PARAMETER VALIDATOR
// =============================================================================

/// Validate and sanitize a set of URL query parameters.
///
/// An entry is kept only if its key matches `^[A-Za-z0-9_-]+$`; malformed
/// entries are dropped entirely, never reported. Kept values lose the
/// characters `<`, `>`, `'`, `"` and are truncated to
/// [`MAX_PARAM_VALUE_LENGTH`] characters.
#[must_use]
pub fn validate_url_params(params: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    params
        .iter()
        .filter(|(key, _)| PARAM_KEY_PATTERN.is_match(key))
        .map(|(key, value)| {
            let cleaned: String = value
                .chars()
                .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
                .take(MAX_PARAM_VALUE_LENGTH)
                .collect();
            (key.clone(), cleaned)
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
