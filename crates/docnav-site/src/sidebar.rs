//! Sidebar view model.
//!
//! A copy of the menu tree with href, active and collapse state resolved
//! for one current path. An external tree view renders it as-is.

use docnav_menu::{MenuItem, MenuNode, Navigator};
use docnav_state::CollapsedSections;
use serde::Serialize;

/// Kind of sidebar node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Component,
    Folder,
}

/// One rendered sidebar node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: String,
    /// Leaf label or folder title.
    pub label: String,
    /// Link target. Folders have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Leaf is the current page, or folder contains it.
    pub active: bool,
    /// Folder is rendered collapsed. Always false for leaves.
    pub collapsed: bool,
    /// Leaves under this node (badge count).
    pub item_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarNode>,
}

/// Inputs shared by every node of one sidebar build.
pub(crate) struct SidebarContext<'a> {
    pub navigator: &'a Navigator,
    pub collapsed: &'a CollapsedSections,
    pub collapsible: bool,
    pub current_path: &'a str,
}

impl SidebarContext<'_> {
    pub(crate) fn build(&self, nodes: &[MenuNode]) -> Vec<SidebarNode> {
        nodes.iter().map(|node| self.node(node)).collect()
    }

    fn node(&self, node: &MenuNode) -> SidebarNode {
        match node {
            MenuNode::Item(item) => SidebarNode {
                kind: match item {
                    MenuItem::File(_) => NodeKind::File,
                    MenuItem::Component(_) => NodeKind::Component,
                },
                id: item.id().to_owned(),
                label: item.label().to_owned(),
                href: Some(self.navigator.href(item)),
                active: self.navigator.is_active(item, self.current_path),
                collapsed: false,
                item_count: 1,
                children: Vec::new(),
            },
            MenuNode::Folder(folder) => SidebarNode {
                kind: NodeKind::Folder,
                id: folder.id.clone(),
                label: folder.title.clone(),
                href: None,
                active: self.navigator.contains_active(node, self.current_path),
                collapsed: self.collapsed.is_collapsed_in(&folder.id, self.collapsible),
                item_count: node.item_count(),
                children: self.build(&folder.children),
            },
        }
    }
}
