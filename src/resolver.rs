//! Path resolution over a single locale tree.

use crate::tree::{LocaleTree, Node};

/// Delimiter used to split paths when the caller does not configure one.
pub const DEFAULT_SPLITTER: &str = "->";

/// Split `path` into tree-key segments.
///
/// An empty `splitter` yields the whole path as one segment.
pub fn segments<'a>(path: &'a str, splitter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut parts = (!splitter.is_empty()).then(|| path.split(splitter));
    let mut whole = parts.is_none().then_some(path);
    std::iter::from_fn(move || match parts.as_mut() {
        Some(split) => split.next(),
        None => whole.take(),
    })
}

/// Walk `tree` along `path` and return the node found there.
///
/// Any segment that is missing, or that would descend through a leaf, makes
/// the whole lookup miss. The final node is returned as-is and may be a
/// subtree.
///
/// # Examples
///
/// ```rust
/// use locale_tree::{LocaleTree, Node, resolver::resolve};
///
/// let tree = LocaleTree::new().with("greeting", LocaleTree::new().with("morning", "Bonjour"));
/// let node = resolve(&tree, "greeting->morning", "->");
/// assert_eq!(node.and_then(Node::as_text), Some("Bonjour"));
/// assert!(resolve(&tree, "greeting->night", "->").is_none());
/// ```
#[must_use]
pub fn resolve<'t>(tree: &'t LocaleTree, path: &str, splitter: &str) -> Option<&'t Node> {
    let mut parts = segments(path, splitter);
    let first = parts.next()?;
    parts.try_fold(tree.get(first)?, |node, segment| {
        node.as_tree().and_then(|child| child.get(segment))
    })
}
