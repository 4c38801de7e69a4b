//! Coverage reporting and up-front path validation.
//!
//! Lookups are only checked at runtime, so hosts that know their path literals
//! ahead of time can validate them against the main locale once, and can ask
//! which main-locale paths each other locale would fall back on.

use crate::error::StoreError;
use crate::resolver::resolve;
use crate::store::LocaleStore;
use crate::tree::{LocaleTree, Node};
use std::collections::BTreeSet;

/// Per-locale coverage relative to the main locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Main locale identifier every entry is compared against.
    pub main: String,
    /// Number of leaf paths in the main locale.
    pub total: usize,
    /// One entry per non-main locale, in collection order.
    pub locales: Vec<LocaleCoverage>,
}

/// Coverage of a single non-main locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    /// Locale identifier.
    pub locale: String,
    /// Main-locale leaf paths this locale resolves to a node of the same kind.
    pub present: usize,
    /// Main-locale leaf paths that do not resolve in this locale; lookups of
    /// these fall back.
    pub missing: Vec<String>,
    /// Paths that resolve in both locales but to nodes of different kinds.
    ///
    /// Lookups of these do not fall back, so typed helpers such as
    /// [`LocaleStore::text`] fail with [`StoreError::UnexpectedNode`].
    pub mismatched: Vec<String>,
    /// Leaf paths of this locale that do not resolve in the main locale.
    pub extra: Vec<String>,
}

impl LocaleCoverage {
    /// Whether every main-locale path resolves here to a node of the same kind.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty()
    }
}

fn node_at<'t>(tree: Option<&'t LocaleTree>, path: &str, splitter: &str) -> Option<&'t Node> {
    tree.and_then(|root| resolve(root, path, splitter))
}

impl LocaleStore {
    /// Compare every non-main locale against the main locale.
    ///
    /// Each path is checked with the same resolver lookups use, so `missing`
    /// lists exactly the paths that would fall back. Path lists are sorted.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let splitter = self.splitter();
        let main = self.main_locale();
        let main_tree = self.tree(main);
        let reference = main_tree
            .map(|tree| tree.leaf_paths(splitter))
            .unwrap_or_default();

        let locales = self
            .locales()
            .filter(|id| *id != main)
            .map(|id| {
                let own_tree = self.tree(id);
                let mut missing = Vec::new();
                let mut mismatched = BTreeSet::new();
                let mut extra = Vec::new();
                for path in &reference {
                    let main_node = node_at(main_tree, path, splitter);
                    match (main_node, node_at(own_tree, path, splitter)) {
                        (_, None) => missing.push(path.clone()),
                        (Some(expected), Some(found)) if expected.kind() != found.kind() => {
                            mismatched.insert(path.clone());
                        }
                        _ => {}
                    }
                }
                let own_paths = own_tree
                    .map(|tree| tree.leaf_paths(splitter))
                    .unwrap_or_default();
                for path in own_paths {
                    let own_node = node_at(own_tree, &path, splitter);
                    match (node_at(main_tree, &path, splitter), own_node) {
                        (None, _) => extra.push(path),
                        (Some(expected), Some(found)) if expected.kind() != found.kind() => {
                            mismatched.insert(path);
                        }
                        _ => {}
                    }
                }
                missing.sort_unstable();
                extra.sort_unstable();
                let shadowed = reference
                    .iter()
                    .filter(|path| mismatched.contains(path.as_str()))
                    .count();
                LocaleCoverage {
                    locale: id.to_owned(),
                    present: reference
                        .len()
                        .saturating_sub(missing.len())
                        .saturating_sub(shadowed),
                    missing,
                    mismatched: mismatched.into_iter().collect(),
                    extra,
                }
            })
            .collect();

        CoverageReport {
            main: main.to_owned(),
            total: reference.len(),
            locales,
        }
    }

    /// Check that every path in `paths` resolves in the main locale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnresolvedPaths`] listing each path that does not
    /// resolve, in the order supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locale_tree::{LocaleCollection, LocaleStore, LocaleTree, StoreOptions};
    ///
    /// let mut locales = LocaleCollection::new();
    /// locales.insert("en".into(), LocaleTree::new().with("hello", "Hello"));
    /// let store = LocaleStore::new("en", locales, StoreOptions::default().with_sources(["en"]))?;
    ///
    /// assert!(store.validate_paths(["hello"]).is_ok());
    /// assert!(store.validate_paths(["hello", "bye"]).is_err());
    /// # Ok::<(), locale_tree::StoreError>(())
    /// ```
    pub fn validate_paths<I, P>(&self, paths: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let main = self.main_locale();
        let unresolved: Vec<String> = match self.tree(main) {
            Some(tree) => paths
                .into_iter()
                .filter(|path| resolve(tree, path.as_ref(), self.splitter()).is_none())
                .map(|path| path.as_ref().to_owned())
                .collect(),
            None => paths
                .into_iter()
                .map(|path| path.as_ref().to_owned())
                .collect(),
        };
        if unresolved.is_empty() {
            return Ok(());
        }
        Err(StoreError::UnresolvedPaths {
            locale: main.to_owned(),
            paths: unresolved,
        })
    }
}
