//! Storage seam.
//!
//! [`StorageOps`] is the dependency-injection boundary between the document
//! store and the real filesystem: plain POSIX-like read/write/stat/rename
//! primitives with `io::Error` results. [`LocalStorage`] is the production
//! implementation; tests substitute in-memory fakes to inject failures.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Raw file operations the document store is built on.
#[async_trait]
pub trait StorageOps: Send + Sync {
    /// Read the full contents of a file.
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write content to a file, replacing it wholesale.
    async fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Size of a file in bytes.
    async fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// Create a directory and all parent directories.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Rename a file, replacing any existing file at the destination.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Every regular file under `root`, recursively. An absent root yields
    /// an empty list, not an error.
    fn list_files(&self, root: &Path) -> Vec<PathBuf>;
}

/// [`StorageOps`] backed by the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[async_trait]
impl StorageOps for LocalStorage {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, content).await
    }

    async fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(tokio::fs::metadata(path).await?.len())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        tokio::fs::rename(from, to).await
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_path_buf())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");
        let storage = LocalStorage;

        storage.write_file(&path, "caf\u{00E9} \u{1F600}".as_bytes()).await.unwrap();
        let bytes = storage.read_file(&path).await.unwrap();
        assert_eq!(bytes, "caf\u{00E9} \u{1F600}".as_bytes());
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = LocalStorage.read_file(&dir.path().join("nope.md")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn file_size_reports_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sized.md");
        LocalStorage.write_file(&path, b"12345").await.unwrap();
        assert_eq!(LocalStorage.file_size(&path).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn rename_replaces_destination() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("from.md");
        let to = dir.path().join("to.md");
        LocalStorage.write_file(&from, b"new").await.unwrap();
        LocalStorage.write_file(&to, b"old").await.unwrap();

        LocalStorage.rename(&from, &to).await.unwrap();

        assert!(!LocalStorage.exists(&from));
        assert_eq!(LocalStorage.read_file(&to).await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn list_files_walks_recursively() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("deep/nested")).unwrap();
        std::fs::write(dir.path().join("top.md"), "x").unwrap();
        std::fs::write(dir.path().join("deep/nested/leaf.md"), "y").unwrap();

        let files = LocalStorage.list_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("top.md")));
        assert!(files.iter().any(|p| p.ends_with("deep/nested/leaf.md")));
    }

    #[test]
    fn list_files_on_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = LocalStorage.list_files(&dir.path().join("does-not-exist"));
        assert!(files.is_empty());
    }
}
