//! Navigation resolution against a current path.
//!
//! [`Navigator`] answers three questions for the sidebar:
//!
//! - where does a node link to ([`Navigator::href`])
//! - is a node the current page ([`Navigator::is_active`])
//! - what should the host navigate to when a node is picked
//!   ([`Navigator::navigate`])
//!
//! It never performs navigation itself. Document leaves link under the
//! configured base path, or to `#path` in hash mode; component leaves link to
//! their route verbatim.
//!
//! The document keyed [`INDEX_PATH`] is the home page. The host may report it
//! as the base path, the base path with a trailing slash, or the literal
//! `index`, and all three count as active.
//!
//! A leading `#` on a current path is ignored, so a hash-mode host can pass
//! the location fragment with or without it.

use serde::Serialize;

use crate::model::{Menu, MenuItem, MenuNode};

/// Document key of the home page.
pub const INDEX_PATH: &str = "index";

/// What the host should navigate to after a leaf is activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent<'a> {
    /// Show the document with this key.
    Document(&'a str),
    /// Hand over to the external view registered at this route.
    Route(&'a str),
}

impl<'a> NavIntent<'a> {
    /// Identifier passed to the host's navigation callback.
    #[must_use]
    pub fn identifier(&self) -> &'a str {
        match *self {
            Self::Document(id) | Self::Route(id) => id,
        }
    }
}

/// Breadcrumb entry from the menu root down to the active leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Folder title or leaf label.
    pub title: String,
    /// Link target, `None` for folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Resolves hrefs and active state for menu nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    base_path: String,
    use_hash_urls: bool,
}

impl Navigator {
    /// Create a navigator.
    ///
    /// Trailing slashes are trimmed from `base_path`, so `/` and `` are the
    /// same root.
    #[must_use]
    pub fn new(base_path: &str, use_hash_urls: bool) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_owned(),
            use_hash_urls,
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn use_hash_urls(&self) -> bool {
        self.use_hash_urls
    }

    /// Link target for a leaf.
    #[must_use]
    pub fn href(&self, item: &MenuItem) -> String {
        match item {
            MenuItem::Component(component) => component.route.clone(),
            MenuItem::File(file) => self.document_href(&file.path),
        }
    }

    /// Link target for a document key.
    #[must_use]
    pub fn document_href(&self, path: &str) -> String {
        if self.use_hash_urls {
            format!("#{path}")
        } else if path == INDEX_PATH {
            if self.base_path.is_empty() {
                "/".to_owned()
            } else {
                self.base_path.clone()
            }
        } else if self.base_path.is_empty() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.base_path)
        }
    }

    /// Link target for any node. Folders have none.
    #[must_use]
    pub fn node_href(&self, node: &MenuNode) -> Option<String> {
        match node {
            MenuNode::Item(item) => Some(self.href(item)),
            MenuNode::Folder(_) => None,
        }
    }

    /// Whether a leaf matches `current_path`.
    #[must_use]
    pub fn is_active(&self, item: &MenuItem, current_path: &str) -> bool {
        let current_path = strip_hash(current_path);
        match item {
            MenuItem::Component(component) => {
                current_path == component.route
                    || current_path
                        .strip_prefix(component.route.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            MenuItem::File(file) if file.path == INDEX_PATH => {
                current_path == self.base_path
                    || current_path
                        .strip_prefix(self.base_path.as_str())
                        .is_some_and(|rest| rest == "/")
                    || current_path == INDEX_PATH
            }
            MenuItem::File(file) => {
                current_path == file.path
                    || current_path
                        .strip_prefix(self.base_path.as_str())
                        .and_then(|rest| rest.strip_prefix('/'))
                        .is_some_and(|rest| rest == file.path)
            }
        }
    }

    /// Whether a node, or any leaf under it, matches `current_path`.
    #[must_use]
    pub fn contains_active(&self, node: &MenuNode, current_path: &str) -> bool {
        match node {
            MenuNode::Item(item) => self.is_active(item, current_path),
            MenuNode::Folder(folder) => folder
                .children
                .iter()
                .any(|child| self.contains_active(child, current_path)),
        }
    }

    /// Translate a node selection into a navigation intent.
    ///
    /// Folders only toggle in the view and produce no intent.
    #[must_use]
    pub fn navigate<'n>(&self, node: &'n MenuNode) -> Option<NavIntent<'n>> {
        match node {
            MenuNode::Item(MenuItem::File(file)) => Some(NavIntent::Document(&file.path)),
            MenuNode::Item(MenuItem::Component(component)) => {
                Some(NavIntent::Route(&component.route))
            }
            MenuNode::Folder(_) => None,
        }
    }

    /// Map a host path back to a document key.
    ///
    /// Strips a leading `#`, the base path, and surrounding slashes. An empty
    /// remainder is the home page.
    #[must_use]
    pub fn document_path(&self, current_path: &str) -> String {
        let path = strip_hash(current_path);
        let path = if self.base_path.is_empty() {
            path
        } else {
            match path.strip_prefix(self.base_path.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => path,
            }
        };

        let path = path.trim_matches('/');
        if path.is_empty() {
            INDEX_PATH.to_owned()
        } else {
            path.to_owned()
        }
    }

    /// First leaf in display order that matches `current_path`.
    #[must_use]
    pub fn find_active<'m>(&self, menu: &'m Menu, current_path: &str) -> Option<&'m MenuItem> {
        menu.leaves()
            .into_iter()
            .find(|item| self.is_active(item, current_path))
    }

    /// Folder titles and the leaf label leading to the active leaf.
    ///
    /// Empty when nothing is active.
    #[must_use]
    pub fn active_trail(&self, menu: &Menu, current_path: &str) -> Vec<Breadcrumb> {
        let mut trail = Vec::new();
        self.collect_trail(&menu.sections, current_path, &mut trail);
        trail
    }

    fn collect_trail(
        &self,
        nodes: &[MenuNode],
        current_path: &str,
        trail: &mut Vec<Breadcrumb>,
    ) -> bool {
        for node in nodes {
            match node {
                MenuNode::Item(item) if self.is_active(item, current_path) => {
                    trail.push(Breadcrumb {
                        title: item.label().to_owned(),
                        href: Some(self.href(item)),
                    });
                    return true;
                }
                MenuNode::Item(_) => {}
                MenuNode::Folder(folder) => {
                    trail.push(Breadcrumb {
                        title: folder.title.clone(),
                        href: None,
                    });
                    if self.collect_trail(&folder.children, current_path, trail) {
                        return true;
                    }
                    trail.pop();
                }
            }
        }
        false
    }
}

fn strip_hash(current_path: &str) -> &str {
    current_path.strip_prefix('#').unwrap_or(current_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::{component, file, folder};
    use pretty_assertions::assert_eq;

    fn item(node: &MenuNode) -> &MenuItem {
        match node {
            MenuNode::Item(item) => item,
            MenuNode::Folder(_) => panic!("expected item"),
        }
    }

    fn sample_menu() -> Menu {
        Menu {
            title: "Docs".to_owned(),
            subtitle: None,
            sections: vec![
                file("index", None),
                folder(
                    "guides",
                    None,
                    vec![file("theming", None), folder("advanced", None, vec![file("tokens", None)])],
                ),
                folder("demos", None, vec![component("buttons", "/demo/buttons")]),
            ],
        }
    }

    #[test]
    fn test_href_component_is_route() {
        let nav = Navigator::new("/guide", false);
        assert_eq!(nav.href(item(&component("c", "/demo/cards"))), "/demo/cards");

        let nav = Navigator::new("/guide", true);
        assert_eq!(nav.href(item(&component("c", "/demo/cards"))), "/demo/cards");
    }

    #[test]
    fn test_href_file_with_base_path() {
        let nav = Navigator::new("/guide", false);
        assert_eq!(nav.href(item(&file("index", None))), "/guide");
        assert_eq!(nav.href(item(&file("theming", None))), "/guide/theming");
    }

    #[test]
    fn test_href_file_without_base_path() {
        let nav = Navigator::new("", false);
        assert_eq!(nav.href(item(&file("index", None))), "/");
        assert_eq!(nav.href(item(&file("theming", None))), "/theming");
    }

    #[test]
    fn test_href_hash_mode() {
        let nav = Navigator::new("/guide", true);
        assert_eq!(nav.href(item(&file("index", None))), "#index");
        assert_eq!(nav.href(item(&file("theming", None))), "#theming");
    }

    #[test]
    fn test_trailing_slash_base_path_trimmed() {
        let nav = Navigator::new("/guide/", false);
        assert_eq!(nav.base_path(), "/guide");
        assert_eq!(Navigator::new("/", false).base_path(), "");
    }

    #[test]
    fn test_node_href_folder_is_none() {
        let nav = Navigator::new("", false);
        assert_eq!(nav.node_href(&folder("f", None, Vec::new())), None);
        assert_eq!(nav.node_href(&file("a", None)), Some("/a".to_owned()));
    }

    #[test]
    fn test_index_active_encodings() {
        let nav = Navigator::new("/guide", false);
        let index = file("index", None);

        assert!(nav.is_active(item(&index), "/guide"));
        assert!(nav.is_active(item(&index), "/guide/"));
        assert!(nav.is_active(item(&index), "index"));
        assert!(!nav.is_active(item(&index), "/guide/other"));
        assert!(!nav.is_active(item(&index), "/"));
    }

    #[test]
    fn test_index_active_at_root() {
        let nav = Navigator::new("", false);
        let index = file("index", None);

        assert!(nav.is_active(item(&index), ""));
        assert!(nav.is_active(item(&index), "/"));
        assert!(!nav.is_active(item(&index), "/theming"));
    }

    #[test]
    fn test_file_active() {
        let nav = Navigator::new("/guide", false);
        let theming = file("theming", None);

        assert!(nav.is_active(item(&theming), "theming"));
        assert!(nav.is_active(item(&theming), "/guide/theming"));
        assert!(!nav.is_active(item(&theming), "/guide/theming-extra"));
        assert!(!nav.is_active(item(&theming), "/theming"));
        assert!(!nav.is_active(item(&theming), "/guide/theming/sub"));
    }

    #[test]
    fn test_component_active_with_sub_routes() {
        let nav = Navigator::new("/guide", false);
        let buttons = component("buttons", "/demo/buttons");

        assert!(nav.is_active(item(&buttons), "/demo/buttons"));
        assert!(nav.is_active(item(&buttons), "/demo/buttons/primary"));
        assert!(!nav.is_active(item(&buttons), "/demo/buttons-extra"));
        assert!(!nav.is_active(item(&buttons), "/demo"));
    }

    #[test]
    fn test_active_ignores_leading_hash() {
        let nav = Navigator::new("/guide", true);
        let menu = sample_menu();

        assert!(nav.is_active(item(&file("theming", None)), "#theming"));
        assert!(nav.is_active(item(&file("index", None)), "#index"));
        assert_eq!(nav.find_active(&menu, "#tokens").map(MenuItem::id), Some("tokens"));
        for path in ["theming", "index", "guides/setup"] {
            let href = nav.document_href(path);
            assert_eq!(nav.document_path(&href), path);
            assert!(nav.is_active(item(&file(path, None)), &href), "href {href:?}");
        }
    }

    #[test]
    fn test_contains_active() {
        let nav = Navigator::new("", false);
        let menu = sample_menu();

        assert!(nav.contains_active(&menu.sections[1], "/tokens"));
        assert!(!nav.contains_active(&menu.sections[1], "/demo/buttons"));
        assert!(nav.contains_active(&menu.sections[2], "/demo/buttons/x"));
    }

    #[test]
    fn test_navigate_intents() {
        let nav = Navigator::new("/guide", true);
        let doc = file("theming", None);
        let comp = component("buttons", "/demo/buttons");

        assert_eq!(nav.navigate(&doc), Some(NavIntent::Document("theming")));
        assert_eq!(nav.navigate(&comp).map(|i| i.identifier()), Some("/demo/buttons"));
        assert_eq!(nav.navigate(&folder("f", None, Vec::new())), None);
    }

    #[test]
    fn test_document_path() {
        let nav = Navigator::new("/guide", false);

        assert_eq!(nav.document_path("/guide"), "index");
        assert_eq!(nav.document_path("/guide/"), "index");
        assert_eq!(nav.document_path("/guide/theming"), "theming");
        assert_eq!(nav.document_path("/guide/guides/setup"), "guides/setup");
        assert_eq!(nav.document_path("/guidelines"), "guidelines");
        assert_eq!(nav.document_path("#theming"), "theming");
        assert_eq!(nav.document_path(""), "index");
    }

    #[test]
    fn test_document_path_round_trips_href() {
        for (base, hash) in [("", false), ("/guide", false), ("/guide", true)] {
            let nav = Navigator::new(base, hash);
            for path in ["index", "theming", "guides/setup"] {
                assert_eq!(nav.document_path(&nav.document_href(path)), path);
            }
        }
    }

    #[test]
    fn test_find_active() {
        let nav = Navigator::new("", false);
        let menu = sample_menu();

        assert_eq!(nav.find_active(&menu, "/tokens").map(MenuItem::id), Some("tokens"));
        assert_eq!(nav.find_active(&menu, "/nowhere"), None);
    }

    #[test]
    fn test_active_trail_through_nested_folders() {
        let nav = Navigator::new("/guide", false);
        let menu = sample_menu();

        let trail = nav.active_trail(&menu, "/guide/tokens");

        assert_eq!(
            trail,
            vec![
                Breadcrumb {
                    title: "guides".to_owned(),
                    href: None
                },
                Breadcrumb {
                    title: "advanced".to_owned(),
                    href: None
                },
                Breadcrumb {
                    title: "tokens".to_owned(),
                    href: Some("/guide/tokens".to_owned())
                },
            ]
        );
    }

    #[test]
    fn test_active_trail_empty_when_inactive() {
        let nav = Navigator::new("", false);
        assert!(nav.active_trail(&sample_menu(), "/missing").is_empty());
    }
}
