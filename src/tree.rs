//! In-memory locale trees.
//!
//! A [`LocaleTree`] maps keys to [`Node`]s, each of which is either a nested
//! tree or a [`Leaf`]. Trees are insertion ordered so enumeration and
//! coverage output follow the order in which the caller declared keys.

use indexmap::IndexMap;
use indexmap::map::Iter;
use std::fmt;
use std::sync::Arc;

/// Callable stored in a formatter leaf.
pub type FormatFn = Arc<dyn Fn(&[&str]) -> String + Send + Sync>;

/// Mapping from locale identifier to the tree holding that locale's content.
pub type LocaleCollection = IndexMap<String, LocaleTree>;

/// A terminal, resolvable unit of locale content.
#[derive(Clone)]
pub enum Leaf {
    /// Literal text.
    Text(String),
    /// Text produced from caller-supplied arguments.
    Formatter(FormatFn),
    /// Integer literal such as a dialling code.
    Number(i64),
}

impl Leaf {
    /// Build a text leaf.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Build a formatter leaf from a closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locale_tree::Leaf;
    ///
    /// let greet = Leaf::formatter(|args| format!("Hello {}", args.join(" ")));
    /// assert_eq!(greet.render(&["Alice"]), "Hello Alice");
    /// ```
    #[must_use]
    pub fn formatter<F>(f: F) -> Self
    where
        F: Fn(&[&str]) -> String + Send + Sync + 'static,
    {
        Self::Formatter(Arc::new(f))
    }

    /// Render the leaf.
    ///
    /// Formatter leaves are invoked with `args`; text and number leaves ignore
    /// the arguments and render as themselves.
    #[must_use]
    pub fn render(&self, args: &[&str]) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Formatter(f) => f(args),
            Self::Number(value) => value.to_string(),
        }
    }

    /// Describe which variant this leaf is.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Text(_) => NodeKind::Text,
            Self::Formatter(_) => NodeKind::Formatter,
            Self::Number(_) => NodeKind::Number,
        }
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Formatter(_) => f.write_str("Formatter(<fn>)"),
            Self::Number(value) => f.debug_tuple("Number").field(value).finish(),
        }
    }
}

/// Shape of a resolved node, used in type-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A text leaf.
    Text,
    /// A formatter leaf.
    Formatter,
    /// A number leaf.
    Number,
    /// A nested tree.
    Subtree,
    /// Any of the leaf kinds; only used as an expectation.
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text leaf",
            Self::Formatter => "formatter leaf",
            Self::Number => "number leaf",
            Self::Subtree => "subtree",
            Self::Leaf => "leaf",
        })
    }
}

/// A value stored under a key: a leaf or a nested tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// Terminal content.
    Leaf(Leaf),
    /// Nested keys.
    Tree(LocaleTree),
}

impl Node {
    /// Return the nested tree when this node is one.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&LocaleTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Leaf(_) => None,
        }
    }

    /// Return the leaf when this node is one.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Tree(_) => None,
        }
    }

    /// Return the literal text when this node is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Leaf(Leaf::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Return the callable when this node is a formatter leaf.
    #[must_use]
    pub const fn as_formatter(&self) -> Option<&FormatFn> {
        match self {
            Self::Leaf(Leaf::Formatter(f)) => Some(f),
            _ => None,
        }
    }

    /// Return the integer when this node is a number leaf.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Leaf(Leaf::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Describe the shape of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf(leaf) => leaf.kind(),
            Self::Tree(_) => NodeKind::Subtree,
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<LocaleTree> for Node {
    fn from(tree: LocaleTree) -> Self {
        Self::Tree(tree)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Leaf(Leaf::text(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Leaf(Leaf::Text(text))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Leaf(Leaf::Number(value))
    }
}

/// Insertion-ordered mapping of keys to nodes for one locale.
///
/// # Examples
///
/// ```rust
/// use locale_tree::LocaleTree;
///
/// let tree = LocaleTree::new()
///     .with("hello", "Hello")
///     .with("greeting", LocaleTree::new().with("morning", "Good morning"));
/// assert_eq!(tree.leaf_paths("->"), vec!["hello", "greeting->morning"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleTree {
    entries: IndexMap<String, Node>,
}

impl LocaleTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` under `key`, returning the tree for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    /// Add a formatter leaf under `key`, returning the tree for chaining.
    #[must_use]
    pub fn with_formatter<F>(self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[&str]) -> String + Send + Sync + 'static,
    {
        self.with(key, Leaf::formatter(f))
    }

    /// Insert `node` under `key`, returning any node it replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), node.into())
    }

    /// Look up a direct child.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over direct children in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Collect the path of every leaf, depth first, joined with `splitter`.
    #[must_use]
    pub fn leaf_paths(&self, splitter: &str) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, None, splitter, &mut paths);
        paths
    }
}

fn collect_leaf_paths(
    tree: &LocaleTree,
    prefix: Option<&str>,
    splitter: &str,
    out: &mut Vec<String>,
) {
    for (key, node) in tree.iter() {
        let path = prefix.map_or_else(|| key.clone(), |head| format!("{head}{splitter}{key}"));
        match node {
            Node::Leaf(_) => out.push(path),
            Node::Tree(child) => collect_leaf_paths(child, Some(&path), splitter, out),
        }
    }
}

impl<K, N> FromIterator<(K, N)> for LocaleTree
where
    K: Into<String>,
    N: Into<Node>,
{
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LocaleTree {
    type Item = (&'a String, &'a Node);
    type IntoIter = Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
