//! Host-provided locale preferences.
//!
//! When a store is built without explicit `sources`, the preference list comes
//! from the host: the `LOCALE_TREE_LOCALE` environment variable first, then the
//! operating system's preferred locales. Every entry is normalized to a BCP 47
//! tag so values such as `en_US.UTF-8` still match `en-US` trees.

use ortho_config::LanguageIdentifier;
use std::str::FromStr;

/// Environment variable name used to override the host locale list.
pub const LOCALE_TREE_LOCALE_ENV: &str = "LOCALE_TREE_LOCALE";

/// Source of the `LOCALE_TREE_LOCALE` override.
///
/// Stores only ever read through this trait, so tests can supply a fixed
/// override without touching the process environment.
pub trait EnvProvider {
    /// Value of the variable named `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from `std::env`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Source of the operating system's locale list.
pub trait SystemLocale {
    /// Return the host's preferred locales, most preferred first.
    fn system_locales(&self) -> Vec<String>;
}

/// System locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locales(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

/// Drop the POSIX codeset (`.UTF-8`) and modifier (`@euro`) from `raw`.
fn posix_locale_base(raw: &str) -> &str {
    raw.split(['.', '@']).next().unwrap_or(raw).trim()
}

/// Turn a host locale string into a tag comparable with tree identifiers.
///
/// POSIX-style values such as `de_DE.UTF-8@euro` reduce to `de-DE`. Values that
/// are not language identifiers once reduced, such as `C`, yield `None`.
///
/// # Examples
///
/// ```rust
/// use locale_tree::host::normalize_locale_tag;
///
/// assert_eq!(normalize_locale_tag("en_US.UTF-8"), Some("en-US".to_owned()));
/// assert_eq!(normalize_locale_tag("es-ES"), Some("es-ES".to_owned()));
/// assert_eq!(normalize_locale_tag("C"), None);
/// ```
#[must_use]
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    Some(posix_locale_base(raw.trim()))
        .filter(|base| !base.is_empty())
        .and_then(|base| LanguageIdentifier::from_str(&base.replace('_', "-")).ok())
        .map(|lang| lang.to_string())
}

/// Build the host preference list.
///
/// The environment override comes first, followed by the system locales.
/// Entries that do not normalize are skipped and duplicates keep their first
/// position.
///
/// # Examples
///
/// ```rust
/// use locale_tree::host::{EnvProvider, SystemLocale, host_preferences};
///
/// struct NoEnv;
/// impl EnvProvider for NoEnv {
///     fn var(&self, _key: &str) -> Option<String> {
///         None
///     }
/// }
///
/// struct Fixed;
/// impl SystemLocale for Fixed {
///     fn system_locales(&self) -> Vec<String> {
///         vec!["fr_FR.UTF-8".into(), "en_US".into()]
///     }
/// }
///
/// assert_eq!(host_preferences(&NoEnv, &Fixed), vec!["fr-FR", "en-US"]);
/// ```
#[must_use]
pub fn host_preferences(env: &impl EnvProvider, system: &impl SystemLocale) -> Vec<String> {
    let env_locale = env.var(LOCALE_TREE_LOCALE_ENV);
    let system_locales = system.system_locales();
    let mut preferences: Vec<String> = Vec::new();
    let candidates = env_locale
        .iter()
        .chain(system_locales.iter())
        .filter_map(|raw| normalize_locale_tag(raw));
    for tag in candidates {
        if !preferences.contains(&tag) {
            preferences.push(tag);
        }
    }
    preferences
}
