//! Destination sink: persists a computed output set to a directory.
//!
//! Every filename is final before the first write starts, so section files
//! have no data dependency on each other and are written concurrently.
//! Each write is atomic (temp file, then rename); content is deterministic,
//! so a failed file can simply be re-written on a retry.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, instrument};

use docshard_shared::{OutputFile, Result, ShardError};

/// Write all output files into `dest`, creating the directory if needed.
///
/// Returns the number of files written. The first write failure aborts the
/// remaining joins and surfaces as [`ShardError::Write`].
#[instrument(skip(files), fields(dest = %dest.display(), count = files.len()))]
pub async fn write_output(dest: &Path, files: &[OutputFile]) -> Result<usize> {
    tokio::fs::create_dir_all(dest)
        .await
        .map_err(|e| ShardError::write_io(dest, e))?;

    let mut set: JoinSet<Result<PathBuf>> = JoinSet::new();

    for file in files {
        let path = dest.join(&file.relative_name);
        let temp = dest.join(format!(".{}.tmp", file.relative_name));
        let content = file.content.clone();

        set.spawn(async move {
            write_atomic(&path, &temp, &content).await?;
            Ok(path)
        });
    }

    let mut written = 0usize;
    while let Some(joined) = set.join_next().await {
        let path = joined
            .map_err(|e| ShardError::write_io(dest, std::io::Error::other(e)))??;
        debug!(path = %path.display(), "wrote output file");
        written += 1;
    }

    Ok(written)
}

/// Write to a temp file, then rename into place.
async fn write_atomic(path: &Path, temp: &Path, content: &str) -> Result<()> {
    tokio::fs::write(temp, content)
        .await
        .map_err(|e| ShardError::write_io(temp, e))?;

    tokio::fs::rename(temp, path)
        .await
        .map_err(|e| ShardError::write_io(path, e))
}
