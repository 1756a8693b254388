//! Markdown link rewriting.
//!
//! A single regex pass over raw Markdown text. Code spans and fenced blocks
//! are not special-cased: the body is rewritten before it reaches a Markdown
//! renderer, so links inside code are rewritten too.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Rewrite relative link targets in `body`.
///
/// Targets starting with `http://`, `https://`, `#` or `/` are left alone.
/// For the rest, a trailing `#anchor` is split off and `resolve(base_path,
/// path)` is asked for an absolute path. `Some` replaces the target (anchor
/// re-appended), `None` keeps the link byte-identical.
///
/// # Example
///
/// ```
/// use docnav_content::rewrite_links;
///
/// let out = rewrite_links("[See guide](./other.md#section)", "guide", |_, _| {
///     Some("/docs/other".to_owned())
/// });
/// assert_eq!(out, "[See guide](/docs/other#section)");
/// ```
pub fn rewrite_links<F>(body: &str, base_path: &str, resolve: F) -> String
where
    F: Fn(&str, &str) -> Option<String>,
{
    LINK_RE
        .replace_all(body, |caps: &Captures<'_>| {
            let text = &caps[1];
            let target = &caps[2];
            match rewrite_target(target, base_path, &resolve) {
                Some(rewritten) => format!("[{text}]({rewritten})"),
                None => caps[0].to_owned(),
            }
        })
        .into_owned()
}

fn rewrite_target<F>(target: &str, base_path: &str, resolve: &F) -> Option<String>
where
    F: Fn(&str, &str) -> Option<String>,
{
    if target.starts_with("http://")
        || target.starts_with("https://")
        || target.starts_with('#')
        || target.starts_with('/')
    {
        return None;
    }

    let (path_part, anchor) = match target.find('#') {
        Some(pos) => (&target[..pos], &target[pos..]),
        None => (target, ""),
    };

    let resolved = resolve(base_path, path_part)?;
    Some(format!("{resolved}{anchor}"))
}

/// Join `relative` onto the directory `base`.
///
/// Both use `/` separators. `.` segments are dropped and `..` pops a segment;
/// popping past the root is ignored, so the result never escapes `base`'s
/// tree. The result has no leading or trailing slash.
///
/// ```
/// use docnav_content::resolve_relative;
///
/// assert_eq!(resolve_relative("guide/setup", "../intro.md"), "guide/intro.md");
/// assert_eq!(resolve_relative("", "../../x.md"), "x.md");
/// ```
#[must_use]
pub fn resolve_relative(base: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}
