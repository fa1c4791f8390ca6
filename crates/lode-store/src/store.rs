//! The document store.
//!
//! Logical entity paths in, whole documents out. The vault root is an
//! explicit configuration value passed in at construction and threaded
//! through every resolution; nothing below this layer ever sees a physical
//! path of its own making.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::errors::VaultError;
use crate::sandbox::{self, DOC_EXTENSION};
use crate::storage::StorageOps;

/// Sandboxed read/write/list operations over the vault root.
pub struct DocumentStore {
    root: PathBuf,
    storage: Arc<dyn StorageOps>,
}

impl DocumentStore {
    /// Create a store over `root`. The root is folded into lexically-normal
    /// form once here so every later confinement check compares against the
    /// same spelling.
    pub fn new(root: impl Into<PathBuf>, storage: Arc<dyn StorageOps>) -> Self {
        Self { root: sandbox::lexical_resolve(&root.into()), storage }
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical path, enforcing confinement.
    fn resolve(&self, logical: &str) -> Result<PathBuf, VaultError> {
        sandbox::resolve(&self.root, logical)
    }

    /// Replace the entity's content wholesale, creating intermediate
    /// directories as needed. Overwriting an existing entity is not an error.
    pub async fn write(&self, logical: &str, content: &str) -> Result<(), VaultError> {
        let physical = self.resolve(logical)?;
        if let Some(parent) = physical.parent() {
            self.storage
                .create_dir_all(parent)
                .await
                .map_err(VaultError::Storage)?;
        }
        self.storage
            .write_file(&physical, content.as_bytes())
            .await
            .map_err(|e| VaultError::from_io(e, logical))?;
        debug!(path = logical, bytes = content.len(), "entity written");
        Ok(())
    }

    /// Full content of the entity. Fails with [`VaultError::NotFound`] when
    /// it does not exist.
    pub async fn read(&self, logical: &str) -> Result<String, VaultError> {
        let physical = self.resolve(logical)?;
        let bytes = self
            .storage
            .read_file(&physical)
            .await
            .map_err(|e| VaultError::from_io(e, logical))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Full content, or `None` when the entity does not exist. This is the
    /// primitive behind every "absent optional document" read: the callers
    /// decide what a fresh default looks like.
    pub async fn try_read(&self, logical: &str) -> Result<Option<String>, VaultError> {
        match self.read(logical).await {
            Ok(content) => Ok(Some(content)),
            Err(VaultError::NotFound { .. }) => Ok(None),
            Err(other) => Err(other),
        }
    }

    /// Size in bytes, or `None` when the entity does not exist.
    pub async fn try_size(&self, logical: &str) -> Result<Option<u64>, VaultError> {
        let physical = self.resolve(logical)?;
        match self.storage.file_size(&physical).await {
            Ok(size) => Ok(Some(size)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::Storage(e)),
        }
    }

    /// Rename an entity to a new logical path, replacing any existing entity
    /// there. Both ends are sandbox-checked.
    pub async fn rename(&self, from: &str, to: &str) -> Result<(), VaultError> {
        let from_physical = self.resolve(from)?;
        let to_physical = self.resolve(to)?;
        if let Some(parent) = to_physical.parent() {
            self.storage
                .create_dir_all(parent)
                .await
                .map_err(VaultError::Storage)?;
        }
        self.storage
            .rename(&from_physical, &to_physical)
            .await
            .map_err(|e| VaultError::from_io(e, from))?;
        debug!(from, to, "entity renamed");
        Ok(())
    }

    /// Every entity under the root as logical paths, extension stripped,
    /// sorted lexicographically. With a prefix, only entities whose logical
    /// path starts with that literal prefix (no glob semantics). An empty or
    /// missing root yields an empty list.
    pub async fn list(&self, prefix: Option<&str>) -> Vec<String> {
        let suffix = format!(".{DOC_EXTENSION}");
        let mut entities: Vec<String> = self
            .storage
            .list_files(&self.root)
            .into_iter()
            .filter_map(|file| {
                let relative = file.strip_prefix(&self.root).ok()?;
                let logical = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                logical.strip_suffix(&suffix).map(ToOwned::to_owned)
            })
            .filter(|logical| prefix.is_none_or(|p| logical.starts_with(p)))
            .collect();
        entities.sort();
        entities
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore").field("root", &self.root).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(dir.path(), Arc::new(LocalStorage))
    }

    #[tokio::test]
    async fn write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let content = "# Jane\n\ncaf\u{00E9} \u{1F600} \u{4E16}\u{754C}\n";
        store.write("people/jane", content).await.unwrap();

        assert_eq!(store.read("people/jane").await.unwrap(), content);
    }

    #[tokio::test]
    async fn write_creates_intermediate_directories() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.write("a/b/c/deep", "x").await.unwrap();

        assert!(dir.path().join("a/b/c/deep.md").exists());
    }

    #[tokio::test]
    async fn overwrite_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.write("note", "first").await.unwrap();
        store.write("note", "second").await.unwrap();

        assert_eq!(store.read("note").await.unwrap(), "second");
    }

    #[tokio::test]
    async fn read_missing_entity_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).read("ghost").await.unwrap_err();
        assert!(matches!(err, VaultError::NotFound { path } if path == "ghost"));
    }

    #[tokio::test]
    async fn try_read_missing_entity_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).try_read("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn try_read_present_entity_is_some() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.write("here", "content").await.unwrap();
        assert_eq!(store.try_read("here").await.unwrap(), Some("content".into()));
    }

    #[tokio::test]
    async fn try_size_absent_and_present() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert_eq!(store.try_size("journal").await.unwrap(), None);
        store.write("journal", "12345").await.unwrap();
        assert_eq!(store.try_size("journal").await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn traversal_write_makes_no_mutation() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let err = store.write("../escape", "x").await.unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { .. }));
        // Nothing landed next to the vault root.
        assert!(!dir.path().parent().unwrap().join("escape.md").exists());
    }

    #[tokio::test]
    async fn traversal_read_rejected() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).read("notes/../../secret").await.unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { .. }));
    }

    #[tokio::test]
    async fn list_returns_all_logical_paths_sorted() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.write("b/y", "1").await.unwrap();
        store.write("a/x", "2").await.unwrap();
        store.write("z", "3").await.unwrap();

        let all = store.list(None).await;
        assert_eq!(all, vec!["a/x".to_string(), "b/y".to_string(), "z".to_string()]);
    }

    #[tokio::test]
    async fn list_with_prefix_filters_literally() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.write("a/x", "1").await.unwrap();
        store.write("ab/q", "2").await.unwrap();
        store.write("b/y", "3").await.unwrap();

        assert_eq!(store.list(Some("a/")).await, vec!["a/x".to_string()]);
        // Literal prefix, not a path-segment match.
        assert_eq!(
            store.list(Some("a")).await,
            vec!["a/x".to_string(), "ab/q".to_string()]
        );
    }

    #[tokio::test]
    async fn list_on_empty_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list(None).await.is_empty());
    }

    #[tokio::test]
    async fn list_ignores_non_document_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.write("kept", "1").await.unwrap();
        std::fs::write(dir.path().join("stray.txt"), "x").unwrap();

        assert_eq!(store.list(None).await, vec!["kept".to_string()]);
    }

    #[tokio::test]
    async fn rename_moves_content_and_removes_source() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.write("journal", "entries").await.unwrap();

        store.rename("journal", "archives/journal-2026-08-06").await.unwrap();

        assert_eq!(store.try_read("journal").await.unwrap(), None);
        assert_eq!(
            store.read("archives/journal-2026-08-06").await.unwrap(),
            "entries"
        );
    }

    #[tokio::test]
    async fn rename_rejects_escaping_destination() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.write("doc", "x").await.unwrap();

        let err = store.rename("doc", "../../stolen").await.unwrap_err();
        assert!(matches!(err, VaultError::PathEscape { .. }));
        // Source untouched.
        assert_eq!(store.read("doc").await.unwrap(), "x");
    }
}
