//! Document content for docnav.
//!
//! - [`Documents`]: id → raw text map with index fallback and directory loading
//! - [`rewrite_links`]: rewrites relative Markdown link targets before rendering
//!
//! # Example
//!
//! ```
//! use docnav_content::{Documents, resolve_relative, rewrite_links};
//!
//! let docs = Documents::new()
//!     .with("index", "# Home")
//!     .with("guide/setup", "# Setup");
//!
//! let body = "Next: [setup](./setup.md#install)";
//! let out = rewrite_links(body, "guide", |from, to| {
//!     let id = resolve_relative(from, to.strip_suffix(".md")?);
//!     docs.contains(&id).then(|| format!("/docs/{id}"))
//! });
//! assert_eq!(out, "Next: [setup](/docs/guide/setup#install)");
//! ```

mod documents;
mod links;

pub use documents::{Documents, INDEX_ID, LoadError, Resolved};
pub use links::{resolve_relative, rewrite_links};
