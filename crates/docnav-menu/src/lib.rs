//! Menu tree and navigation for docnav.
//!
//! This crate provides:
//! - [`Menu`] and its node types: folders, document leaves, component leaves
//! - [`MenuBuilder`]: builds a sorted menu from raw documents and static
//!   [`Declaration`]s
//! - [`Navigator`]: hrefs, active state, and navigation intents for a current
//!   path
//!
//! # Quick Start
//!
//! ```
//! use docnav_menu::{MenuBuilder, Navigator};
//!
//! let menu = MenuBuilder::new("Components")
//!     .document("index", "# Welcome")
//!     .document("02_buttons", "---\ntitle: Buttons\n---\n")
//!     .build();
//!
//! let nav = Navigator::new("/docs", false);
//! let buttons = menu.find_item("02_buttons").unwrap();
//!
//! assert_eq!(nav.href(buttons), "/docs/02_buttons");
//! assert!(nav.is_active(buttons, "/docs/02_buttons"));
//! ```

mod builder;
mod model;
mod navigation;

pub use builder::{Declaration, MenuBuilder};
pub use model::{
    ComponentMenuItem, DEFAULT_ORDER, FileMenuItem, ItemBase, Menu, MenuFolder, MenuItem,
    MenuNode, sort_nodes,
};
pub use navigation::{Breadcrumb, INDEX_PATH, NavIntent, Navigator};
