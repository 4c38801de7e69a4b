//! Error types raised by the locale store.

// Scoped suppression for version-dependent lint false positives from the
// miette/thiserror derive macros.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use crate::tree::NodeKind;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building or querying a [`crate::LocaleStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum StoreError {
    /// The path is missing from the main locale, so no fallback remains.
    #[error("'{path}' can not be found in locale '{locale}' and no fallback is available.")]
    #[diagnostic(code(locale_tree::store::path_not_found))]
    PathNotFound {
        /// Path that failed to resolve.
        path: String,
        /// Main locale identifier, the last locale searched.
        locale: String,
    },

    /// The main locale is absent from the collection.
    #[error(
        "main locale '{main}' is not present in the locale collection (available: {})",
        .available.join(", ")
    )]
    #[diagnostic(
        code(locale_tree::store::unknown_main_locale),
        help("pass one of the collection's identifiers as the main locale")
    )]
    UnknownMainLocale {
        /// Requested main locale identifier.
        main: String,
        /// Identifiers present in the collection.
        available: Vec<String>,
    },

    /// The configured path splitter is empty.
    #[error("path splitter must not be empty")]
    #[diagnostic(code(locale_tree::store::empty_splitter))]
    EmptySplitter,

    /// The path resolved, but to a node of a different shape.
    #[error("'{path}' resolved to a {found} but a {expected} was expected")]
    #[diagnostic(code(locale_tree::store::unexpected_node))]
    UnexpectedNode {
        /// Path that was resolved.
        path: String,
        /// Shape the caller asked for.
        expected: NodeKind,
        /// Shape actually stored at the path.
        found: NodeKind,
    },

    /// One or more path literals do not resolve in the main locale.
    #[error(
        "{} path(s) can not be found in main locale '{locale}': {}",
        .paths.len(),
        .paths.join(", ")
    )]
    #[diagnostic(code(locale_tree::store::unresolved_paths))]
    UnresolvedPaths {
        /// Main locale identifier.
        locale: String,
        /// Paths that failed to resolve, in the order supplied.
        paths: Vec<String>,
    },
}
