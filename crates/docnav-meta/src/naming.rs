//! Order prefixes and display labels derived from document identifiers.
//!
//! Identifiers may carry a numeric ordering token joined by an underscore:
//!
//! - `03_getting-started.md` → order 3, label "Getting Started"
//! - `design_guide` → no order, label "Design guide"
//!
//! Hyphens separate words that each get capitalized. Underscores only become
//! spaces, so `design_guide` keeps a lowercase second word.

use std::sync::LazyLock;

use regex::Regex;

static ORDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)_(.+)$").unwrap());

/// Result of splitting an identifier into order and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderPrefix<'a> {
    /// Leading number, if present and representable.
    pub order: Option<u32>,
    /// Remainder after `NN_`, or the full input when there is no prefix.
    pub name: &'a str,
}

/// Split a leading `NN_` ordering token from `name`.
///
/// The prefix must start the string; digits elsewhere are ignored. A digit run
/// too large for `u32` counts as no prefix.
#[must_use]
pub fn parse_order_prefix(name: &str) -> OrderPrefix<'_> {
    let parsed = ORDER_PREFIX.captures(name).and_then(|caps| {
        let order = caps.get(1)?.as_str().parse::<u32>().ok()?;
        Some(OrderPrefix {
            order: Some(order),
            name: caps.get(2)?.as_str(),
        })
    });

    parsed.unwrap_or(OrderPrefix { order: None, name })
}

/// Turn `getting-started` into `Getting Started`.
///
/// Underscores become spaces first, then each hyphen-separated word gets an
/// uppercase first character and the words are joined with spaces.
#[must_use]
pub fn to_title_case(name: &str) -> String {
    name.replace('_', " ")
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fallback label for a document without an explicit title.
///
/// Strips a trailing `.md`, any directory components, and the order prefix
/// before title-casing.
#[must_use]
pub fn file_to_label(filename: &str) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    let stem = stem.rsplit('/').next().unwrap_or(stem);
    to_title_case(parse_order_prefix(stem).name)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_prefix_parsed() {
        let p = parse_order_prefix("01_intro");
        assert_eq!(p.order, Some(1));
        assert_eq!(p.name, "intro");
    }

    #[test]
    fn test_no_prefix() {
        let p = parse_order_prefix("intro");
        assert_eq!(p.order, None);
        assert_eq!(p.name, "intro");
    }

    #[test]
    fn test_prefix_only_at_start() {
        let p = parse_order_prefix("intro_02_more");
        assert_eq!(p.order, None);
        assert_eq!(p.name, "intro_02_more");

        let p = parse_order_prefix("v2_api");
        assert_eq!(p.order, None);
    }

    #[test]
    fn test_prefix_requires_name() {
        let p = parse_order_prefix("10_");
        assert_eq!(p.order, None);
        assert_eq!(p.name, "10_");
    }

    #[test]
    fn test_only_first_prefix_is_stripped() {
        let p = parse_order_prefix("01_02_nested");
        assert_eq!(p.order, Some(1));
        assert_eq!(p.name, "02_nested");
    }

    #[test]
    fn test_overflowing_prefix_is_ignored() {
        let p = parse_order_prefix("99999999999_big");
        assert_eq!(p.order, None);
        assert_eq!(p.name, "99999999999_big");
    }

    #[test]
    fn test_title_case_hyphens() {
        assert_eq!(to_title_case("getting-started"), "Getting Started");
        assert_eq!(to_title_case("button"), "Button");
    }

    #[test]
    fn test_title_case_underscores_not_capitalized() {
        assert_eq!(to_title_case("design_guide"), "Design guide");
        assert_eq!(to_title_case("color_tokens-and_themes"), "Color tokens And themes");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_file_to_label() {
        assert_eq!(file_to_label("03_getting-started.md"), "Getting Started");
        assert_eq!(file_to_label("index"), "Index");
        assert_eq!(file_to_label("design_guide.md"), "Design guide");
    }

    #[test]
    fn test_file_to_label_uses_last_segment() {
        assert_eq!(file_to_label("components/02_date-picker.md"), "Date Picker");
    }
}
