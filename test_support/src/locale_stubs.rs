//! Fixed host inputs for building stores in tests.
//!
//! Pass these to `LocaleStore::with_host` so initial locale selection does not
//! depend on the machine running the suite.

use locale_tree::host::{self, EnvProvider, SystemLocale};

/// Answers `LOCALE_TREE_LOCALE` from a stored value and nothing else.
#[derive(Debug, Default, Clone)]
pub struct StubEnv {
    /// Optional value to return for `LOCALE_TREE_LOCALE`.
    pub locale: Option<String>,
}

impl StubEnv {
    /// Report `locale` as the `LOCALE_TREE_LOCALE` value.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }
}

impl EnvProvider for StubEnv {
    fn var(&self, key: &str) -> Option<String> {
        if key == host::LOCALE_TREE_LOCALE_ENV {
            return self.locale.clone();
        }
        None
    }
}

/// Reports a fixed operating-system locale list.
#[derive(Debug, Default, Clone)]
pub struct StubSystemLocale {
    /// Locales to report, most preferred first.
    pub locales: Vec<String>,
}

impl StubSystemLocale {
    /// Create a stub reporting `locales` in order.
    pub fn with_locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }
}

impl SystemLocale for StubSystemLocale {
    fn system_locales(&self) -> Vec<String> {
        self.locales.clone()
    }
}
