//! Construction options for [`crate::LocaleStore`].

use crate::resolver::DEFAULT_SPLITTER;
use serde::Deserialize;

/// Options recognised when building a store.
///
/// The struct deserializes with per-field defaults, so a host can embed it in
/// its own configuration file and omit either field.
///
/// # Examples
///
/// ```rust
/// use locale_tree::StoreOptions;
///
/// let options = StoreOptions::default().with_splitter(".").with_sources(["fr", "en"]);
/// assert_eq!(options.splitter, ".");
/// assert_eq!(options.sources.as_deref(), Some(&["fr".to_owned(), "en".to_owned()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Delimiter used to split lookup paths.
    pub splitter: String,
    /// Ordered preference list used once to pick the initial locale.
    ///
    /// `None` defers to the host preference list.
    pub sources: Option<Vec<String>>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            splitter: DEFAULT_SPLITTER.to_owned(),
            sources: None,
        }
    }
}

impl StoreOptions {
    /// Replace the path splitter.
    #[must_use]
    pub fn with_splitter(mut self, splitter: impl Into<String>) -> Self {
        self.splitter = splitter.into();
        self
    }

    /// Supply an explicit preference list instead of the host one.
    #[must_use]
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = Some(sources.into_iter().map(Into::into).collect());
        self
    }
}
