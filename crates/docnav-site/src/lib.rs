//! Site facade for docnav.
//!
//! Combines configuration, documents, the menu, navigation and collapse
//! state into per-path view models for a host application:
//!
//! - [`Page`]: the document for a current path, links rewritten, with
//!   breadcrumbs
//! - [`SidebarNode`]: the menu tree with href, active and collapse state
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docnav_config::Config;
//! use docnav_content::Documents;
//! use docnav_site::Site;
//! use docnav_state::MemoryStore;
//!
//! let documents = Documents::new()
//!     .with("index", "---\ntitle: Home\n---\nSee [setup](02_setup.md).")
//!     .with("02_setup", "# Setup");
//!
//! let mut config = Config::default();
//! config.navigation.base_path = "/docs".to_owned();
//!
//! let site = Site::new(&config, documents, Arc::new(MemoryStore::new()));
//!
//! let page = site.page("/docs").unwrap();
//! assert_eq!(page.title, "Home");
//! assert_eq!(page.body, "See [setup](/docs/02_setup).");
//!
//! let sidebar = site.sidebar("/docs/02_setup");
//! assert!(sidebar.iter().any(|node| node.id == "02_setup" && node.active));
//! ```

mod page;
mod sidebar;
mod site;

pub use page::Page;
pub use sidebar::{NodeKind, SidebarNode};
pub use site::{Site, SiteError};
