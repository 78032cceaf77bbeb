use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;

/// Filesystem service for per-request resources: uploaded inputs under the
/// uploads root, scratch directories for separation output under the temp
/// root. Both roots are created on construction.
pub struct FileStorage {
    uploads_dir: PathBuf,
    temp_dir: PathBuf,
}

impl FileStorage {
    pub fn new(uploads_dir: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>) -> Result<Self> {
        let uploads_dir = uploads_dir.into();
        let temp_dir = temp_dir.into();

        std::fs::create_dir_all(&uploads_dir)?;
        std::fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            uploads_dir,
            temp_dir,
        })
    }

    /// Writes an upload to a freshly generated unique path, keeping the
    /// client filename's extension (`mp3` if it has none).
    pub async fn save_upload(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_else(|| "mp3".to_string());

        let path = self.uploads_dir.join(format!("{}.{ext}", Uuid::new_v4()));
        fs::write(&path, data).await?;

        Ok(path)
    }

    /// Creates a uniquely named scratch directory for one request's output.
    pub fn create_temp_dir(&self) -> Result<PathBuf> {
        let dir = self.temp_dir.join(Uuid::new_v4().to_string());
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Best-effort removal of files and directories. Failures are logged,
    /// never propagated.
    pub async fn cleanup(&self, paths: &[PathBuf]) {
        for path in paths {
            let removed = if path.is_dir() {
                fs::remove_dir_all(path).await
            } else if path.is_file() {
                fs::remove_file(path).await
            } else {
                continue;
            };

            if let Err(e) = removed {
                warn!(path = %path.display(), error = %e, "cleanup failed");
            }
        }
    }
}
