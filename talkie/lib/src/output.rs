//! Persisting synthesized audio.
//!
//! Audio is written to a sibling temp file and renamed over the target, so a
//! reader of the output path sees either the previous file or the complete
//! new one.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::errors::TtsError;

/// Write `data` to `path`, replacing any existing file.
///
/// Missing parent directories are created.
///
/// ## Errors
///
/// Returns `TtsError::OutputWriteFailed` if the directory, the temp file or
/// the final rename cannot be written.
pub async fn write_output(path: &Path, data: &[u8]) -> Result<(), TtsError> {
    let fail = |source: std::io::Error| TtsError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tokio::fs::create_dir_all(parent).await.map_err(fail)?;

    let temp_path = temp_path_for(parent);

    if let Err(e) = write_synced(&temp_path, data).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(fail(e));
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(fail(e));
    }

    debug!(path = %path.display(), bytes = data.len(), "Wrote audio file");
    Ok(())
}

async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}

/// A unique temp file name in `dir`, so the rename stays on one filesystem.
fn temp_path_for(dir: &Path) -> PathBuf {
    dir.join(format!(
        ".talkie-tmp-{}-{}.tmp",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ))
}
