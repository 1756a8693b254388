//! Menu building from documents and static declarations.
//!
//! Documents contribute file leaves whose label and order come from their
//! frontmatter, falling back to the identifier:
//!
//! - label: `title` → [`file_to_label`] of the id
//! - order: `order` → numeric id prefix (`03_setup`) → [`DEFAULT_ORDER`]
//!
//! Folders and component leaves are never derived; they come from
//! [`Declaration`]s, which may also place a document inside a folder. Any
//! document not placed by a declaration lands at the top level.
//!
//! [`DEFAULT_ORDER`]: crate::DEFAULT_ORDER

use std::collections::HashSet;

use docnav_meta::{file_to_label, parse_frontmatter, parse_order_prefix};
use serde::{Deserialize, Serialize};

use crate::model::{
    ComponentMenuItem, FileMenuItem, ItemBase, Menu, MenuFolder, MenuItem, MenuNode, sort_nodes,
};

/// Static structure entry, usually read from configuration.
///
/// ```toml
/// [[sections]]
/// type = "folder"
/// id = "components"
/// title = "Components"
///
/// [[sections.children]]
/// type = "component"
/// id = "buttons"
/// label = "Buttons"
/// route = "/demo/buttons"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Declaration {
    /// A grouping node.
    Folder {
        id: String,
        title: String,
        #[serde(default)]
        order: Option<f64>,
        #[serde(default)]
        children: Vec<Declaration>,
    },
    /// Place the document with this id here.
    Document { id: String },
    /// A leaf rendered by the host at `route`.
    Component {
        id: String,
        label: String,
        route: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        order: Option<f64>,
    },
}

impl Declaration {
    fn collect_document_ids<'a>(declarations: &'a [Self], out: &mut HashSet<&'a str>) {
        for declaration in declarations {
            match declaration {
                Self::Folder { children, .. } => Self::collect_document_ids(children, out),
                Self::Document { id } => {
                    out.insert(id);
                }
                Self::Component { .. } => {}
            }
        }
    }
}

/// Builder for a sorted [`Menu`].
///
/// # Example
///
/// ```
/// use docnav_menu::{Declaration, MenuBuilder};
///
/// let declarations = vec![Declaration::Folder {
///     id: "guides".to_owned(),
///     title: "Guides".to_owned(),
///     order: Some(10.0),
///     children: vec![Declaration::Document { id: "theming".to_owned() }],
/// }];
///
/// let menu = MenuBuilder::new("Design System")
///     .document("index", "---\ntitle: Welcome\norder: 0\n---\nHello")
///     .document("theming", "# Theming")
///     .declarations(&declarations)
///     .build();
///
/// assert_eq!(menu.sections.len(), 2);
/// assert_eq!(menu.sections[0].id(), "index");
/// assert_eq!(menu.sections[1].id(), "guides");
/// ```
pub struct MenuBuilder<'a> {
    title: String,
    subtitle: Option<String>,
    documents: Vec<(&'a str, &'a str)>,
    declarations: &'a [Declaration],
}

impl<'a> MenuBuilder<'a> {
    /// Create a builder for a menu with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            documents: Vec::new(),
            declarations: &[],
        }
    }

    /// Set the menu subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    /// Add one raw document.
    #[must_use]
    pub fn document(mut self, id: &'a str, raw: &'a str) -> Self {
        self.documents.push((id, raw));
        self
    }

    /// Add raw documents in iteration order.
    ///
    /// Iteration order breaks ties between documents with equal order.
    #[must_use]
    pub fn documents<I>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.documents.extend(documents);
        self
    }

    /// Set the static structure declarations.
    #[must_use]
    pub fn declarations(mut self, declarations: &'a [Declaration]) -> Self {
        self.declarations = declarations;
        self
    }

    /// Build the menu.
    ///
    /// Top-level input order is unclaimed documents first, then declarations,
    /// before the stable sort.
    #[must_use]
    pub fn build(self) -> Menu {
        let mut claimed = HashSet::new();
        Declaration::collect_document_ids(self.declarations, &mut claimed);

        let mut sections: Vec<MenuNode> = self
            .documents
            .iter()
            .filter(|(id, _)| !claimed.contains(id))
            .map(|&(id, raw)| MenuNode::from(file_item(id, Some(raw))))
            .collect();
        sections.extend(
            self.declarations
                .iter()
                .map(|declaration| self.declared_node(declaration)),
        );

        sort_nodes(&mut sections);

        tracing::debug!(
            sections = sections.len(),
            documents = self.documents.len(),
            "Built menu"
        );

        Menu {
            title: self.title,
            subtitle: self.subtitle,
            sections,
        }
    }

    fn declared_node(&self, declaration: &Declaration) -> MenuNode {
        match declaration {
            Declaration::Folder {
                id,
                title,
                order,
                children,
            } => MenuNode::Folder(MenuFolder {
                id: id.clone(),
                title: title.clone(),
                order: *order,
                children: children
                    .iter()
                    .map(|child| self.declared_node(child))
                    .collect(),
            }),
            Declaration::Document { id } => {
                let raw = self.raw_document(id);
                if raw.is_none() {
                    tracing::debug!(id = %id, "Declared document not in document map");
                }
                file_item(id, raw).into()
            }
            Declaration::Component {
                id,
                label,
                route,
                description,
                order,
            } => MenuItem::Component(ComponentMenuItem {
                base: ItemBase {
                    id: id.clone(),
                    label: label.clone(),
                    description: description.clone(),
                    order: *order,
                },
                route: route.clone(),
            })
            .into(),
        }
    }

    fn raw_document(&self, id: &str) -> Option<&'a str> {
        self.documents
            .iter()
            .find(|(doc_id, _)| *doc_id == id)
            .map(|&(_, raw)| raw)
    }
}

/// Derive a file leaf for document `id`.
fn file_item(id: &str, raw: Option<&str>) -> MenuItem {
    let metadata = raw
        .map(|raw| parse_frontmatter(raw).metadata)
        .unwrap_or_default();

    let stem = id.rsplit('/').next().unwrap_or(id);
    let prefix_order = parse_order_prefix(stem).order.map(f64::from);

    MenuItem::File(FileMenuItem {
        base: ItemBase {
            id: id.to_owned(),
            label: metadata.title().unwrap_or_else(|| file_to_label(id)),
            description: metadata.description(),
            order: metadata.order().or(prefix_order),
        },
        path: id.to_owned(),
    })
}
