use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{AppError, Result};

/// Expected stem names, in the order they are returned.
pub const STEM_NAMES: [&str; 4] = ["vocals", "drums", "bass", "other"];

/// Seam between the request pipeline and the external separation tool.
#[async_trait]
pub trait StemSeparator: Send + Sync {
    /// Separates `input` into four stems under `output_dir` and returns
    /// their paths in [`STEM_NAMES`] order. No partial results: any
    /// invocation or verification failure is a single error.
    async fn separate(&self, input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Runs Spleeter's 4-stem model through `docker exec` against an already
/// running container. The container must mount the service data root at the
/// same absolute path, so host paths are passed straight through.
pub struct SpleeterSeparator {
    container: String,
}

impl SpleeterSeparator {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
        }
    }
}

#[async_trait]
impl StemSeparator for SpleeterSeparator {
    async fn separate(&self, input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        debug!(
            container = %self.container,
            input = %input.display(),
            output_dir = %output_dir.display(),
            "running spleeter"
        );

        let output = Command::new("docker")
            .arg("exec")
            .arg(&self.container)
            .args(["spleeter", "separate", "-p", "spleeter:4stems", "-o"])
            .arg(output_dir)
            .arg(input)
            .output()
            .await
            .map_err(|e| AppError::Separation(format!("failed to run docker exec: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Separation(format!(
                "spleeter exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        info!(input = %input.display(), "spleeter finished");
        verify_outputs(input, output_dir)
    }
}

/// Spleeter writes stems into a subdirectory named after the input file.
/// Checks that all four expected files exist and returns their paths in
/// fixed order.
pub fn verify_outputs(input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let base = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let stem_dir = output_dir.join(base);

    let mut paths = Vec::with_capacity(STEM_NAMES.len());
    for name in STEM_NAMES {
        let path = stem_dir.join(format!("{name}.wav"));
        if !path.is_file() {
            return Err(AppError::Separation(format!(
                "missing output file: {name}.wav"
            )));
        }
        paths.push(path);
    }

    Ok(paths)
}
