//! The locale store: active-locale state plus lookup with main-locale fallback.

use crate::error::StoreError;
use crate::host::{self, EnvProvider, SysLocale, SystemEnv, SystemLocale};
use crate::matcher::match_locale;
use crate::options::StoreOptions;
use crate::resolver::resolve;
use crate::tree::{LocaleCollection, LocaleTree, Node, NodeKind};

/// Owns a locale collection and answers path lookups against the active locale.
///
/// Lookups that miss in a non-main locale are retried once against the main
/// locale, emitting a `WARN` event through `tracing`. A miss in the main locale
/// is returned as [`StoreError::PathNotFound`].
///
/// # Examples
///
/// ```rust
/// use locale_tree::{LocaleCollection, LocaleStore, LocaleTree, StoreOptions};
///
/// let mut locales = LocaleCollection::new();
/// locales.insert("en".into(), LocaleTree::new().with("hello", "Hello").with("bye", "Bye"));
/// locales.insert("fr".into(), LocaleTree::new().with("hello", "Bonjour"));
///
/// let options = StoreOptions::default().with_sources(["fr-FR"]);
/// let store = LocaleStore::new("en", locales, options)?;
/// assert_eq!(store.current(), "fr");
/// assert_eq!(store.text("hello")?, "Bonjour");
/// assert_eq!(store.text("bye")?, "Bye");
/// # Ok::<(), locale_tree::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LocaleStore {
    main: String,
    current: String,
    splitter: String,
    locales: LocaleCollection,
}

impl LocaleStore {
    /// Build a store, reading the host preference list when `options.sources`
    /// is unset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownMainLocale`] when `main` is not a key of
    /// `locales`, and [`StoreError::EmptySplitter`] when the configured
    /// splitter is empty.
    pub fn new(
        main: impl Into<String>,
        locales: LocaleCollection,
        options: StoreOptions,
    ) -> Result<Self, StoreError> {
        Self::with_host(main, locales, options, &SystemEnv, &SysLocale)
    }

    /// Build a store using the supplied host providers for the preference
    /// list.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`LocaleStore::new`].
    pub fn with_host(
        main: impl Into<String>,
        locales: LocaleCollection,
        options: StoreOptions,
        env: &impl EnvProvider,
        system: &impl SystemLocale,
    ) -> Result<Self, StoreError> {
        let main_id = main.into();
        if options.splitter.is_empty() {
            return Err(StoreError::EmptySplitter);
        }
        if !locales.contains_key(&main_id) {
            return Err(StoreError::UnknownMainLocale {
                main: main_id,
                available: locales.keys().cloned().collect(),
            });
        }
        let preferences = options
            .sources
            .unwrap_or_else(|| host::host_preferences(env, system));
        let current = match_locale(&preferences, locales.keys().map(String::as_str))
            .map_or_else(|| main_id.clone(), ToOwned::to_owned);
        tracing::debug!(
            locale = %current,
            main = %main_id,
            ?preferences,
            "selected initial locale"
        );
        Ok(Self {
            main: main_id,
            current,
            splitter: options.splitter,
            locales,
        })
    }

    /// Replace the active locale.
    ///
    /// The identifier is not validated; an unknown identifier makes every
    /// later lookup fall back to the main locale.
    pub fn set(&mut self, id: impl Into<String>) {
        self.current = id.into();
        tracing::debug!(locale = %self.current, "active locale set");
    }

    /// Identifier of the active locale.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Identifier of the main (fallback) locale.
    #[must_use]
    pub fn main_locale(&self) -> &str {
        &self.main
    }

    /// Delimiter used to split lookup paths.
    #[must_use]
    pub fn splitter(&self) -> &str {
        &self.splitter
    }

    /// Identifiers in the collection, in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Whether `id` names a locale in the collection.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.locales.contains_key(id)
    }

    /// Borrow the tree for `id`.
    #[must_use]
    pub fn tree(&self, id: &str) -> Option<&LocaleTree> {
        self.locales.get(id)
    }

    /// Resolve `path` against the active locale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathNotFound`] when neither the active nor the
    /// main locale contains `path`.
    pub fn get(&self, path: &str) -> Result<&Node, StoreError> {
        self.get_in(path, &self.current)
    }

    /// Resolve `path` against locale `id`, falling back to the main locale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathNotFound`] when neither `id` nor the main
    /// locale contains `path`.
    pub fn get_in(&self, path: &str, id: &str) -> Result<&Node, StoreError> {
        if let Some(node) = self.lookup(path, id) {
            return Ok(node);
        }
        if id != self.main {
            tracing::warn!(
                path,
                locale = id,
                main = %self.main,
                "'{path}' can not be found in locale '{id}', falling back to main '{}'.",
                self.main
            );
            if let Some(node) = self.lookup(path, &self.main) {
                return Ok(node);
            }
        }
        Err(StoreError::PathNotFound {
            path: path.to_owned(),
            locale: self.main.clone(),
        })
    }

    /// Resolve `path` against the active locale and require a text leaf.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathNotFound`] as for [`LocaleStore::get`], or
    /// [`StoreError::UnexpectedNode`] when the node is not text.
    pub fn text(&self, path: &str) -> Result<&str, StoreError> {
        self.text_in(path, &self.current)
    }

    /// Resolve `path` against locale `id` and require a text leaf.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathNotFound`] as for [`LocaleStore::get_in`], or
    /// [`StoreError::UnexpectedNode`] when the node is not text.
    pub fn text_in(&self, path: &str, id: &str) -> Result<&str, StoreError> {
        let node = self.get_in(path, id)?;
        node.as_text().ok_or_else(|| StoreError::UnexpectedNode {
            path: path.to_owned(),
            expected: NodeKind::Text,
            found: node.kind(),
        })
    }

    /// Resolve `path` against the active locale and render the leaf with
    /// `args`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathNotFound`] as for [`LocaleStore::get`], or
    /// [`StoreError::UnexpectedNode`] when the path names a subtree.
    pub fn format(&self, path: &str, args: &[&str]) -> Result<String, StoreError> {
        self.format_in(path, &self.current, args)
    }

    /// Resolve `path` against locale `id` and render the leaf with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathNotFound`] as for [`LocaleStore::get_in`], or
    /// [`StoreError::UnexpectedNode`] when the path names a subtree.
    pub fn format_in(&self, path: &str, id: &str, args: &[&str]) -> Result<String, StoreError> {
        let node = self.get_in(path, id)?;
        node.as_leaf()
            .map(|leaf| leaf.render(args))
            .ok_or_else(|| StoreError::UnexpectedNode {
                path: path.to_owned(),
                expected: NodeKind::Leaf,
                found: node.kind(),
            })
    }

    fn lookup(&self, path: &str, id: &str) -> Option<&Node> {
        self.locales
            .get(id)
            .and_then(|tree| resolve(tree, path, &self.splitter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    struct NoEnv;

    impl EnvProvider for NoEnv {
        fn var(&self, _key: &str) -> Option<String> {
            None
        }
    }

    struct FixedSystem(Vec<String>);

    impl SystemLocale for FixedSystem {
        fn system_locales(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    #[fixture]
    fn locales() -> LocaleCollection {
        let mut locales = LocaleCollection::new();
        locales.insert(
            "en".into(),
            LocaleTree::new().with("hello", "Hello").with("only_en", "English"),
        );
        locales.insert("fr".into(), LocaleTree::new().with("hello", "Bonjour"));
        locales
    }

    fn build(locales: LocaleCollection, options: StoreOptions) -> Result<LocaleStore, StoreError> {
        LocaleStore::with_host("en", locales, options, &NoEnv, &FixedSystem(Vec::new()))
    }

    #[rstest]
    fn unknown_main_locale_is_rejected(locales: LocaleCollection) {
        let err = LocaleStore::with_host(
            "de",
            locales,
            StoreOptions::default(),
            &NoEnv,
            &FixedSystem(Vec::new()),
        )
        .expect_err("main locale 'de' is absent");
        assert_eq!(
            err,
            StoreError::UnknownMainLocale {
                main: "de".into(),
                available: vec!["en".into(), "fr".into()],
            }
        );
    }

    #[rstest]
    fn empty_splitter_is_rejected(locales: LocaleCollection) {
        let err = build(locales, StoreOptions::default().with_splitter(""))
            .expect_err("empty splitter");
        assert_eq!(err, StoreError::EmptySplitter);
    }

    #[rstest]
    fn unmatched_sources_select_main(locales: LocaleCollection) {
        let store = build(locales, StoreOptions::default().with_sources(["de", "it-IT"]))
            .expect("store");
        assert_eq!(store.current(), "en");
    }

    #[rstest]
    fn host_preferences_apply_without_sources(locales: LocaleCollection) {
        let system = FixedSystem(vec!["fr_CA.UTF-8".into()]);
        let store = LocaleStore::with_host("en", locales, StoreOptions::default(), &NoEnv, &system)
            .expect("store");
        assert_eq!(store.current(), "fr");
    }

    #[rstest]
    fn unknown_active_locale_falls_back(locales: LocaleCollection) {
        let mut store = build(locales, StoreOptions::default()).expect("store");
        store.set("xx");
        assert_eq!(store.text("hello").expect("fallback"), "Hello");
    }

    #[rstest]
    fn format_expects_any_leaf() {
        let mut locales = LocaleCollection::new();
        locales.insert(
            "en".into(),
            LocaleTree::new().with("group", LocaleTree::new().with("k", "v")),
        );
        let store = build(locales, StoreOptions::default()).expect("store");
        let err = store.format("group", &[]).expect_err("subtree cannot render");
        assert_eq!(
            err,
            StoreError::UnexpectedNode {
                path: "group".into(),
                expected: NodeKind::Leaf,
                found: NodeKind::Subtree,
            }
        );
        assert_eq!(
            err.to_string(),
            "'group' resolved to a subtree but a leaf was expected"
        );
    }

    #[rstest]
    fn text_rejects_subtrees() {
        let mut locales = LocaleCollection::new();
        locales.insert(
            "en".into(),
            LocaleTree::new().with("group", LocaleTree::new().with("k", "v")),
        );
        let store = build(locales, StoreOptions::default()).expect("store");
        let err = store.text("group").expect_err("subtree is not text");
        assert_eq!(
            err,
            StoreError::UnexpectedNode {
                path: "group".into(),
                expected: NodeKind::Text,
                found: NodeKind::Subtree,
            }
        );
    }
}
