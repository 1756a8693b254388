//! Site facade.
//!
//! [`Site`] ties the pieces together for one documentation tree: it builds
//! the menu once from the loaded documents and configured declarations,
//! keeps the collapse state for the configured storage key, and answers
//! per-path queries from the host with [`Page`] and [`SidebarNode`] view
//! models.

use std::path::Path;
use std::sync::Arc;

use docnav_config::{Config, ConfigError, Overrides};
use docnav_content::{Documents, LoadError, resolve_relative, rewrite_links};
use docnav_menu::{Menu, MenuBuilder, MenuItem, Navigator};
use docnav_meta::{file_to_label, parse_frontmatter};
use docnav_state::{CollapsedSections, FileStore, KvStore};

use crate::page::Page;
use crate::sidebar::{SidebarContext, SidebarNode};

/// Error opening a site from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Documents could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// A documentation tree with its menu, navigation scheme and collapse state.
pub struct Site {
    menu: Menu,
    navigator: Navigator,
    documents: Documents,
    collapsed: CollapsedSections,
    collapsible: bool,
}

impl Site {
    /// Build a site from already-loaded documents.
    ///
    /// Collapse state is read from `store` under the configured storage key.
    #[must_use]
    pub fn new(config: &Config, documents: Documents, store: Arc<dyn KvStore>) -> Self {
        let menu = MenuBuilder::new(config.menu.title.clone())
            .subtitle(config.menu.subtitle.clone())
            .documents(documents.iter())
            .declarations(&config.sections)
            .build();

        Self {
            menu,
            navigator: Navigator::new(
                &config.navigation.base_path,
                config.navigation.use_hash_urls,
            ),
            documents,
            collapsed: CollapsedSections::load(store, config.collapse_resolved.storage_key.clone()),
            collapsible: config.collapse_resolved.collapsible,
        }
    }

    /// Load documents from the configured source directory and persist
    /// collapse state under the configured state directory.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Load`] if the source directory cannot be read.
    pub fn open(config: &Config) -> Result<Self, SiteError> {
        let documents = Documents::load_dir(&config.docs_resolved.source_dir)?;
        let store = Arc::new(FileStore::new(config.collapse_resolved.state_dir.clone()));
        Ok(Self::new(config, documents, store))
    }

    /// Load configuration (explicit path or discovered `docnav.toml`), then
    /// [`open`](Self::open) the site.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] for configuration failures and
    /// [`SiteError::Load`] for document loading failures.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, SiteError> {
        let config = Config::load(config_path, overrides)?;
        Self::open(&config)
    }

    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn documents(&self) -> &Documents {
        &self.documents
    }

    #[must_use]
    pub fn collapsed(&self) -> &CollapsedSections {
        &self.collapsed
    }

    /// Whether folders honor collapse state.
    #[must_use]
    pub fn collapsible(&self) -> bool {
        self.collapsible
    }

    /// Flip a folder's collapse state and persist it. Returns the new flag.
    pub fn toggle(&mut self, folder_id: &str) -> bool {
        if self.menu.find_folder(folder_id).is_none() {
            tracing::debug!(id = %folder_id, "Toggling id that is not a folder in this menu");
        }
        self.collapsed.toggle(folder_id)
    }

    /// Resolve the document shown at `current_path`.
    ///
    /// `current_path` is the host's location: a pathname, or in hash mode
    /// the fragment with or without its leading `#`.
    ///
    /// Missing documents fall back to the index page. Returns `None` when
    /// the path belongs to a component route, or when there is no index
    /// page to fall back to.
    #[must_use]
    pub fn page(&self, current_path: &str) -> Option<Page> {
        if let Some(MenuItem::Component(component)) =
            self.navigator.find_active(&self.menu, current_path)
        {
            tracing::debug!(route = %component.route, "Current path is a component route");
            return None;
        }

        let requested = self.navigator.document_path(current_path);
        let resolved = self.documents.get_or_index(&requested)?;
        let parsed = parse_frontmatter(resolved.raw);

        let title = parsed.metadata.title().unwrap_or_else(|| {
            self.menu
                .find_item(resolved.id)
                .map_or_else(|| file_to_label(resolved.id), |item| item.label().to_owned())
        });

        let base_dir = resolved.id.rsplit_once('/').map_or("", |(dir, _)| dir);
        let body = rewrite_links(parsed.content, base_dir, |from, to| {
            self.link_target(from, to)
        });

        Some(Page {
            id: resolved.id.to_owned(),
            requested,
            fallback: resolved.fallback,
            title,
            description: parsed.metadata.description(),
            breadcrumbs: self.navigator.active_trail(&self.menu, resolved.id),
            metadata: parsed.metadata,
            body,
        })
    }

    /// Sidebar view model for `current_path`.
    ///
    /// Accepts the same path forms as [`page`](Self::page).
    #[must_use]
    pub fn sidebar(&self, current_path: &str) -> Vec<SidebarNode> {
        SidebarContext {
            navigator: &self.navigator,
            collapsed: &self.collapsed,
            collapsible: self.collapsible,
            current_path,
        }
        .build(&self.menu.sections)
    }

    /// Href for a relative `.md` link that names an existing document.
    fn link_target(&self, from: &str, to: &str) -> Option<String> {
        let target = to.strip_suffix(".md")?;
        let id = resolve_relative(from, target);
        if self.documents.contains(&id) {
            Some(self.navigator.document_href(&id))
        } else {
            tracing::debug!(from = %from, to = %to, "Link target is not a known document");
            None
        }
    }
}
