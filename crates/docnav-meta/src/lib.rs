//! Document metadata for docnav.
//!
//! Two small, total functions sit at the bottom of the content pipeline:
//!
//! - [`parse_frontmatter`]: splits a raw document into its `key: value`
//!   header block and the remaining body
//! - [`file_to_label`] and friends: derive display order and a readable label
//!   from a document identifier such as `03_getting-started.md`
//!
//! Neither returns errors. A document without a well-formed header simply has
//! no metadata, and an identifier without a numeric prefix simply has no order.
//!
//! # Example
//!
//! ```
//! use docnav_meta::{file_to_label, parse_frontmatter};
//!
//! let doc = parse_frontmatter("---\ntitle: Buttons\norder: 2\n---\n# Buttons\n");
//! assert_eq!(doc.metadata.title().as_deref(), Some("Buttons"));
//! assert_eq!(doc.metadata.order(), Some(2.0));
//! assert_eq!(doc.content, "# Buttons\n");
//!
//! assert_eq!(file_to_label("03_getting-started.md"), "Getting Started");
//! ```

mod frontmatter;
mod naming;

pub use frontmatter::{Frontmatter, FrontmatterValue, ParsedDocument, parse_frontmatter};
pub use naming::{OrderPrefix, file_to_label, parse_order_prefix, to_title_case};
