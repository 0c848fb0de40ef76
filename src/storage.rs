use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::AppResult;

const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// A stored file, addressable both ways: `path` on the filesystem and `url`
/// as served over HTTP. Built together so neither is ever reconstructed by
/// string concatenation elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    pub path: PathBuf,
    pub url: String,
}

/// The managed upload directory plus the public prefix it is served under.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    public_prefix: String,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn storage_path(&self, filename: &str) -> StoragePath {
        StoragePath {
            path: self.root.join(filename),
            url: format!("{}/{}", self.public_prefix, filename),
        }
    }

    /// Write `bytes` under the sanitized `filename` and return where it
    /// ended up. The caller is expected to have checked `allowed_image`.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> AppResult<StoragePath> {
        let target = self.storage_path(&sanitize_filename(filename));
        fs::create_dir_all(&self.root).await?;
        fs::write(&target.path, bytes).await?;
        Ok(target)
    }

    /// Best-effort removal of a previously stored file by its public URL.
    /// A file already missing on disk is not an error; anything else is
    /// logged and swallowed.
    pub async fn delete_by_url(&self, url: &str) {
        let Some(filename) = url
            .strip_prefix(&self.public_prefix)
            .map(|rest| rest.trim_start_matches('/'))
        else {
            tracing::warn!(url, "image url outside the upload prefix, not deleting");
            return;
        };
        let path = self.root.join(filename);
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "image delete failed");
            }
        }
    }
}

/// Extension gate for uploads: the filename must contain a dot and the part
/// after the last dot, lowercased, must be a known image extension.
pub fn allowed_image(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        }
        _ => false,
    }
}

/// Flatten a client-supplied filename to something safe to join onto the
/// upload directory: only the last path component survives, anything outside
/// `[A-Za-z0-9._-]` becomes an underscore, and leading dots are stripped.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(allowed_image("photo.PNG"));
        assert!(allowed_image("photo.jpeg"));
        assert!(allowed_image("a.b.gif"));
    }

    #[test]
    fn extension_check_rejects_other_files() {
        assert!(!allowed_image("script.sh"));
        assert!(!allowed_image("noextension"));
        assert!(!allowed_image(".png"));
    }

    #[test]
    fn sanitize_strips_traversal_attempts() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("my photo.png"), "my_photo.png");
        assert_eq!(sanitize_filename(""), "upload");
    }

    #[tokio::test]
    async fn save_and_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), "/static/uploads");

        let stored = store.save("mug.png", b"not really a png").await.unwrap();
        assert_eq!(stored.url, "/static/uploads/mug.png");
        assert!(stored.path.exists());

        store.delete_by_url(&stored.url).await;
        assert!(!stored.path.exists());

        // deleting again is tolerated
        store.delete_by_url(&stored.url).await;
    }
}
