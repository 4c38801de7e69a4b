//! Shared helpers for the `locale_tree` integration tests.
//!
//! Provides the sample locale collection used across suites, log capture for
//! asserting on fallback diagnostics, stub host providers and a scoped guard
//! for mutating the process environment.

pub mod env;
pub mod locale_stubs;
pub mod logs;

pub use env::ScopedEnvVar;
pub use logs::capture_logs;

use locale_tree::{LocaleCollection, LocaleTree};

/// Identifier of the main locale in [`sample_locales`].
pub const MAIN: &str = "en";

/// Build the two-locale collection used by most scenarios.
///
/// `en` is complete; `fr` lacks `greeting->night`, `telephone_code` and
/// `greetFn`.
///
/// # Examples
///
/// ```
/// let locales = test_support::sample_locales();
/// assert_eq!(locales.keys().collect::<Vec<_>>(), vec!["en", "fr"]);
/// ```
#[must_use]
pub fn sample_locales() -> LocaleCollection {
    let mut locales = LocaleCollection::new();
    locales.insert(
        MAIN.to_owned(),
        LocaleTree::new()
            .with(
                "greeting",
                LocaleTree::new()
                    .with("morning", "Good morning")
                    .with("night", "Good night"),
            )
            .with("hello", "Hello")
            .with("telephone_code", 1_i64)
            .with_formatter("greetFn", |args| format!("Hello {}", args.join(" "))),
    );
    locales.insert(
        "fr".to_owned(),
        LocaleTree::new()
            .with("greeting", LocaleTree::new().with("morning", "Bonjour"))
            .with("hello", "Bonjour"),
    );
    locales
}
