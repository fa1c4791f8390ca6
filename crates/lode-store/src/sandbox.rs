//! Logical-path resolution confined to the vault root.
//!
//! A logical entity path like `people/john-doe` maps to
//! `<root>/people/john-doe.md`. Resolution is lexical: `.` and `..`
//! segments are folded out first, and only the RESOLVED location is checked
//! against the root, so encoded or relative traversal sequences cannot slip
//! past a raw-string prefix test. Escaping the root is a hard failure, never
//! a clamp.

use std::path::{Component, Path, PathBuf};

use crate::errors::VaultError;

/// File extension every entity is stored under.
pub const DOC_EXTENSION: &str = "md";

/// Resolve a logical entity path to its physical location under `root`.
///
/// `root` must already be in lexically-normal form (see [`lexical_resolve`]).
/// Fails with [`VaultError::PathEscape`] when the resolved location is not
/// strictly inside the root.
pub fn resolve(root: &Path, logical: &str) -> Result<PathBuf, VaultError> {
    if logical.trim().is_empty() {
        return Err(VaultError::PathEscape { path: logical.to_owned() });
    }

    let candidate = root.join(format!("{logical}.{DOC_EXTENSION}"));
    let resolved = lexical_resolve(&candidate);

    // Strictly inside: equal to the root is not a file, and anything that
    // popped out of the root fails starts_with.
    if resolved != root && resolved.starts_with(root) {
        Ok(resolved)
    } else {
        Err(VaultError::PathEscape { path: logical.to_owned() })
    }
}

/// Fold `.` and `..` components out of a path without touching the
/// filesystem. Entities may not exist yet, so symlink-following
/// canonicalization is not an option; `..` never pops above the filesystem
/// root, so a traversal-heavy input resolves to a location that simply fails
/// the confinement check.
pub fn lexical_resolve(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => resolved.push(prefix.as_os_str()),
            Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() at the root is a no-op, which keeps absolute inputs
                // absolute rather than silently relative.
                let _ = resolved.pop();
            }
            Component::Normal(segment) => resolved.push(segment),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/vault")
    }

    #[test]
    fn simple_path_resolves_under_root() {
        let resolved = resolve(&root(), "people/john-doe").unwrap();
        assert_eq!(resolved, PathBuf::from("/vault/people/john-doe.md"));
    }

    #[test]
    fn root_level_entity_resolves() {
        let resolved = resolve(&root(), "journal").unwrap();
        assert_eq!(resolved, PathBuf::from("/vault/journal.md"));
    }

    #[test]
    fn dotdot_traversal_rejected() {
        let err = resolve(&root(), "../outside").unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { path } if path == "../outside"));
    }

    #[test]
    fn nested_dotdot_traversal_rejected() {
        let err = resolve(&root(), "notes/../../../etc/passwd").unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { .. }));
    }

    #[test]
    fn dotdot_that_stays_inside_is_allowed() {
        let resolved = resolve(&root(), "notes/../people/jane").unwrap();
        assert_eq!(resolved, PathBuf::from("/vault/people/jane.md"));
    }

    #[test]
    fn absolute_logical_path_rejected() {
        let err = resolve(&root(), "/etc/passwd").unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { .. }));
    }

    #[test]
    fn empty_logical_path_rejected() {
        assert!(matches!(
            resolve(&root(), "").unwrap_err(),
            VaultError::PathEscape { .. }
        ));
        assert!(matches!(
            resolve(&root(), "   ").unwrap_err(),
            VaultError::PathEscape { .. }
        ));
    }

    #[test]
    fn curdir_segments_are_folded() {
        let resolved = resolve(&root(), "./notes/./today").unwrap();
        assert_eq!(resolved, PathBuf::from("/vault/notes/today.md"));
    }

    #[test]
    fn traversal_past_filesystem_root_still_rejected() {
        let err = resolve(&root(), "../../../../../../outside").unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { .. }));
    }

    #[test]
    fn lexical_resolve_folds_parent_components() {
        let resolved = lexical_resolve(Path::new("/a/b/../c/./d"));
        assert_eq!(resolved, PathBuf::from("/a/c/d"));
    }

    #[test]
    fn lexical_resolve_never_pops_above_root() {
        let resolved = lexical_resolve(Path::new("/../../x"));
        assert_eq!(resolved, PathBuf::from("/x"));
    }
}
