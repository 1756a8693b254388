//! Frontmatter block extraction.
//!
//! A document may open with a header of the exact form:
//!
//! ```text
//! ---
//! title: Getting Started
//! order: 1
//! ---
//! body...
//! ```
//!
//! The opening delimiter must sit at position 0 and the block is closed by the
//! first `\n---\n` that follows. Header lines are `key: value` pairs split at
//! the first colon. Values that parse as finite decimal numbers become
//! [`FrontmatterValue::Number`]; everything else is kept as trimmed text.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

const OPEN_DELIMITER: &str = "---\n";
const CLOSE_DELIMITER: &str = "\n---\n";

/// A single frontmatter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// Numeric-looking value, coerced on parse.
    Number(f64),
    /// Any other value, trimmed.
    Text(String),
}

impl FrontmatterValue {
    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric content, if this is a number value.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Text(String::new());
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.to_owned()),
        }
    }
}

impl fmt::Display for FrontmatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Key/value metadata parsed from a document header.
///
/// Later duplicate keys overwrite earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    entries: BTreeMap<String, FrontmatterValue>,
}

impl Frontmatter {
    /// Look up a raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.entries.get(key)
    }

    /// Explicit display title.
    ///
    /// A numeric title (`title: 2024`) is rendered back to text.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.get("title").map(ToString::to_string)
    }

    /// Explicit sort order. Text values are ignored.
    #[must_use]
    pub fn order(&self) -> Option<f64> {
        self.get("order").and_then(FrontmatterValue::as_number)
    }

    /// Short description shown next to menu entries.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.get("description").map(ToString::to_string)
    }

    /// Number of parsed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontmatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn insert_line(&mut self, line: &str) {
        // Key must be non-empty: a colon at position 0 does not count.
        let Some(colon) = line.find(':').filter(|&i| i > 0) else {
            return;
        };
        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();
        self.entries
            .insert(key.to_owned(), FrontmatterValue::parse(value));
    }
}

/// A document split into header metadata and body.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedDocument<'a> {
    /// Parsed header, empty when the document has none.
    pub metadata: Frontmatter,
    /// Everything after the closing delimiter, or the whole input.
    pub content: &'a str,
}

/// Split a raw document into frontmatter and body.
///
/// Never fails: input without a well-formed header yields empty metadata and
/// the original text as content.
#[must_use]
pub fn parse_frontmatter(raw: &str) -> ParsedDocument<'_> {
    let unchanged = ParsedDocument {
        metadata: Frontmatter::default(),
        content: raw,
    };

    let Some(rest) = raw.strip_prefix(OPEN_DELIMITER) else {
        return unchanged;
    };
    let Some(close) = rest.find(CLOSE_DELIMITER) else {
        return unchanged;
    };

    let mut metadata = Frontmatter::default();
    for line in rest[..close].split('\n') {
        metadata.insert_line(line);
    }

    ParsedDocument {
        metadata,
        content: &rest[close + CLOSE_DELIMITER.len()..],
    }
}
