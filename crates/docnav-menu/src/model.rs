//! Menu tree data model.
//!
//! The tree is owned top-down: a [`Menu`] owns its sections, a
//! [`MenuFolder`] owns its children. Leaves come in two flavors, tagged by
//! `type` when serialized:
//!
//! ```json
//! {"type": "file", "id": "01_intro", "label": "Intro", "path": "01_intro"}
//! {"type": "component", "id": "buttons", "label": "Buttons", "route": "/demo/buttons"}
//! ```
//!
//! Folders serialize without a tag and are recognized by their `children`.

use serde::{Deserialize, Serialize};

/// Sort key for nodes without an explicit order.
///
/// Nodes declaring an order above this value sort after unordered ones. This
/// is a fixed limit, not a configuration point.
pub const DEFAULT_ORDER: f64 = 999.0;

/// Fields shared by every leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemBase {
    /// Unique identifier within the tree.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Optional short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit order, `None` sorts with [`DEFAULT_ORDER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

/// A leaf backed by a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileMenuItem {
    #[serde(flatten)]
    pub base: ItemBase,
    /// Key into the document map.
    pub path: String,
}

/// A leaf rendered by an external view instead of a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentMenuItem {
    #[serde(flatten)]
    pub base: ItemBase,
    /// Absolute route handled by the host.
    pub route: String,
}

/// A navigable leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuItem {
    File(FileMenuItem),
    Component(ComponentMenuItem),
}

impl MenuItem {
    /// Shared leaf fields.
    #[must_use]
    pub fn base(&self) -> &ItemBase {
        match self {
            Self::File(item) => &item.base,
            Self::Component(item) => &item.base,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.base().id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.base().label
    }
}

/// A grouping node. Never represents content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuFolder {
    /// Unique identifier across the whole tree (keys the collapse store).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Explicit order, `None` sorts with [`DEFAULT_ORDER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    /// Child nodes, sorted.
    pub children: Vec<MenuNode>,
}

/// Any node of the menu tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuNode {
    Item(MenuItem),
    Folder(MenuFolder),
}

impl MenuNode {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Item(item) => item.id(),
            Self::Folder(folder) => &folder.id,
        }
    }

    /// Explicit order, if declared.
    #[must_use]
    pub fn order(&self) -> Option<f64> {
        match self {
            Self::Item(item) => item.base().order,
            Self::Folder(folder) => folder.order,
        }
    }

    /// Order used for sorting.
    #[must_use]
    pub fn sort_key(&self) -> f64 {
        self.order().unwrap_or(DEFAULT_ORDER)
    }

    /// Number of leaves under this node. A leaf counts itself.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Folder(folder) => folder.children.iter().map(MenuNode::item_count).sum(),
        }
    }
}

impl From<MenuItem> for MenuNode {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<MenuFolder> for MenuNode {
    fn from(folder: MenuFolder) -> Self {
        Self::Folder(folder)
    }
}

/// Sort a sibling list ascending by order, recursing into folders.
///
/// Stable: equal keys keep their input order.
pub fn sort_nodes(nodes: &mut [MenuNode]) {
    nodes.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    for node in nodes {
        if let MenuNode::Folder(folder) = node {
            sort_nodes(&mut folder.children);
        }
    }
}

/// Root of the menu tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub sections: Vec<MenuNode>,
}

impl Menu {
    /// All leaves in display order (depth-first).
    #[must_use]
    pub fn leaves(&self) -> Vec<&MenuItem> {
        fn collect<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a MenuItem>) {
            for node in nodes {
                match node {
                    MenuNode::Item(item) => out.push(item),
                    MenuNode::Folder(folder) => collect(&folder.children, out),
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.sections, &mut out);
        out
    }

    /// Find a folder anywhere in the tree.
    #[must_use]
    pub fn find_folder(&self, id: &str) -> Option<&MenuFolder> {
        fn find<'a>(nodes: &'a [MenuNode], id: &str) -> Option<&'a MenuFolder> {
            nodes.iter().find_map(|node| match node {
                MenuNode::Folder(folder) if folder.id == id => Some(folder),
                MenuNode::Folder(folder) => find(&folder.children, id),
                MenuNode::Item(_) => None,
            })
        }

        find(&self.sections, id)
    }

    /// Find a leaf anywhere in the tree.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.leaves().into_iter().find(|item| item.id() == id)
    }

    /// Ids of every folder, depth-first.
    #[must_use]
    pub fn folder_ids(&self) -> Vec<&str> {
        fn collect<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                if let MenuNode::Folder(folder) = node {
                    out.push(&folder.id);
                    collect(&folder.children, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.sections, &mut out);
        out
    }

    /// Total number of leaves.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(MenuNode::item_count).sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn file(id: &str, order: Option<f64>) -> MenuNode {
        MenuNode::Item(MenuItem::File(FileMenuItem {
            base: ItemBase {
                id: id.to_owned(),
                label: id.to_owned(),
                description: None,
                order,
            },
            path: id.to_owned(),
        }))
    }

    pub(crate) fn component(id: &str, route: &str) -> MenuNode {
        MenuNode::Item(MenuItem::Component(ComponentMenuItem {
            base: ItemBase {
                id: id.to_owned(),
                label: id.to_owned(),
                description: None,
                order: None,
            },
            route: route.to_owned(),
        }))
    }

    pub(crate) fn folder(id: &str, order: Option<f64>, children: Vec<MenuNode>) -> MenuNode {
        MenuNode::Folder(MenuFolder {
            id: id.to_owned(),
            title: id.to_owned(),
            order,
            children,
        })
    }

    fn ids(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(MenuNode::id).collect()
    }

    #[test]
    fn test_sort_explicit_before_default_and_stable() {
        let mut nodes = vec![
            file("item0", None),
            file("two", Some(2.0)),
            file("item2", None),
            file("one", Some(1.0)),
        ];

        sort_nodes(&mut nodes);

        assert_eq!(ids(&nodes), vec!["one", "two", "item0", "item2"]);
    }

    #[test]
    fn test_sort_order_above_sentinel_goes_last() {
        let mut nodes = vec![file("late", Some(1000.0)), file("plain", None)];

        sort_nodes(&mut nodes);

        assert_eq!(ids(&nodes), vec!["plain", "late"]);
    }

    #[test]
    fn test_sort_recurses_into_folders() {
        let mut nodes = vec![folder(
            "guides",
            None,
            vec![file("b", Some(2.0)), file("a", Some(1.0))],
        )];

        sort_nodes(&mut nodes);

        let MenuNode::Folder(guides) = &nodes[0] else {
            panic!("expected folder");
        };
        assert_eq!(ids(&guides.children), vec!["a", "b"]);
    }

    #[test]
    fn test_item_count_ignores_folders() {
        let node = folder(
            "outer",
            None,
            vec![
                file("a", None),
                folder("inner", None, vec![file("b", None), component("c", "/c")]),
                folder("empty", None, Vec::new()),
            ],
        );

        assert_eq!(node.item_count(), 3);
        assert_eq!(file("x", None).item_count(), 1);
    }

    #[test]
    fn test_menu_lookups() {
        let menu = Menu {
            title: "Docs".to_owned(),
            subtitle: None,
            sections: vec![
                file("intro", None),
                folder(
                    "components",
                    None,
                    vec![component("buttons", "/buttons"), folder("forms", None, vec![file("input", None)])],
                ),
            ],
        };

        let leaves: Vec<&str> = menu.leaves().into_iter().map(MenuItem::id).collect();
        assert_eq!(leaves, vec!["intro", "buttons", "input"]);
        assert_eq!(menu.folder_ids(), vec!["components", "forms"]);
        assert_eq!(menu.find_folder("forms").map(|f| f.children.len()), Some(1));
        assert!(menu.find_folder("intro").is_none());
        assert_eq!(menu.find_item("buttons").map(MenuItem::label), Some("buttons"));
        assert_eq!(menu.item_count(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let node = folder("docs", Some(1.0), vec![file("intro", None), component("demo", "/demo")]);

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "docs",
                "title": "docs",
                "order": 1.0,
                "children": [
                    {"type": "file", "id": "intro", "label": "intro", "path": "intro"},
                    {"type": "component", "id": "demo", "label": "demo", "route": "/demo"}
                ]
            })
        );

        let back: MenuNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
