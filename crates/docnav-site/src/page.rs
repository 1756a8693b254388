//! Page view model.

use docnav_menu::Breadcrumb;
use docnav_meta::Frontmatter;
use serde::Serialize;

/// A document resolved for a current path, ready for a Markdown renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    /// Id of the document shown.
    pub id: String,
    /// Document key the current path mapped to.
    pub requested: String,
    /// True when `requested` was missing and the index page is shown instead.
    pub fallback: bool,
    /// Frontmatter title, else the menu label.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub metadata: Frontmatter,
    /// Document body after the frontmatter, with relative `.md` links
    /// rewritten to document hrefs.
    pub body: String,
    /// Folder titles and label leading to this page.
    pub breadcrumbs: Vec<Breadcrumb>,
}
