//! Namespaced record identifiers.
//!
//! Every declaration parsed from a source file is renamed to
//! `<namespace>=><local name>`, where the namespace is derived from the file
//! the declaration came from. Two files may therefore both declare `Garden`
//! without colliding.

use std::path::Path;

/// Separator between a namespace and a local name.
pub const NAMESPACE_MARKER: &str = "=>";

/// Combines a namespace and a local name into a namespaced identifier.
#[must_use]
pub fn namespaced(namespace: &str, local: &str) -> String {
    format!("{namespace}{NAMESPACE_MARKER}{local}")
}

/// Removes the `<namespace>=>` prefix from a namespaced identifier.
///
/// Names without that prefix are returned unchanged.
#[must_use]
pub fn strip_namespace<'a>(name: &'a str, namespace: &str) -> &'a str {
    name.strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix(NAMESPACE_MARKER))
        .unwrap_or(name)
}

/// Derives the namespace of a source file: its base name without the final
/// extension (`sources/main/ch1.place` -> `ch1`).
#[must_use]
pub fn namespace_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
