//! Locale tree lookup with preference matching and main-locale fallback.
//!
//! A [`LocaleStore`] owns a collection of [`LocaleTree`]s keyed by locale
//! identifier. At construction it picks the active locale by matching an
//! ordered preference list against the collection; lookups then walk the
//! active tree along a delimited path and fall back once to the main locale
//! when the path is missing, reporting the fallback through `tracing`.
//!
//! ```rust
//! use locale_tree::{LocaleCollection, LocaleStore, LocaleTree, StoreOptions};
//!
//! let mut locales = LocaleCollection::new();
//! locales.insert(
//!     "en".into(),
//!     LocaleTree::new()
//!         .with("greeting", LocaleTree::new().with("morning", "Good morning"))
//!         .with_formatter("greet", |args| format!("Hello {}", args.join(" "))),
//! );
//! let store = LocaleStore::new("en", locales, StoreOptions::default().with_sources(["en-GB"]))?;
//! assert_eq!(store.text("greeting->morning")?, "Good morning");
//! assert_eq!(store.format("greet", &["Alice"])?, "Hello Alice");
//! # Ok::<(), locale_tree::StoreError>(())
//! ```

pub mod coverage;
pub mod error;
pub mod host;
pub mod matcher;
pub mod options;
pub mod resolver;
pub mod store;
pub mod tree;

pub use coverage::{CoverageReport, LocaleCoverage};
pub use error::StoreError;
pub use options::StoreOptions;
pub use resolver::DEFAULT_SPLITTER;
pub use store::LocaleStore;
pub use tree::{FormatFn, Leaf, LocaleCollection, LocaleTree, Node, NodeKind};
