//! End-to-end shard pipeline: source file → engine → destination directory.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, instrument};

use docshard_shared::{Result, ShardError, SplitLevel};

use crate::writer;

/// Configuration for sharding one document.
#[derive(Debug, Clone)]
pub struct ShardFileConfig {
    /// Path to the source markdown file.
    pub source: PathBuf,
    /// Destination directory for the generated files.
    pub dest: PathBuf,
}

/// Result of one shard run.
#[derive(Debug, Clone, Serialize)]
pub struct ShardReport {
    /// Extracted document title.
    pub document_title: String,
    /// Detected section boundary depth.
    pub split_level: SplitLevel,
    /// Number of sections extracted.
    pub section_count: usize,
    /// Number of files written (sections + index).
    pub files_written: usize,
    /// Destination directory.
    pub dest: PathBuf,
    /// Total elapsed time in milliseconds.
    pub elapsed_ms: u128,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, report: &ShardReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _report: &ShardReport) {}
}

/// Run the full shard pipeline for one document.
///
/// 1. Read the source file (fatal if unreadable; nothing is emitted)
/// 2. Shard it in memory
/// 3. Write the output set to the destination directory
#[instrument(skip_all, fields(source = %config.source.display(), dest = %config.dest.display()))]
pub async fn shard_file(
    config: &ShardFileConfig,
    progress: &dyn ProgressReporter,
) -> Result<ShardReport> {
    let start = Instant::now();

    progress.phase("Reading source document");
    let input = tokio::fs::read_to_string(&config.source)
        .await
        .map_err(|e| ShardError::source_io(&config.source, e))?;

    progress.phase("Partitioning document");
    let output = docshard_engine::shard(&input);

    progress.phase("Writing output files");
    let files_written = writer::write_output(&config.dest, &output.files).await?;

    let report = ShardReport {
        document_title: output.document_title,
        split_level: output.split_level,
        section_count: output.section_count,
        files_written,
        dest: config.dest.clone(),
        elapsed_ms: start.elapsed().as_millis(),
    };

    progress.done(&report);

    info!(
        title = %report.document_title,
        level = %report.split_level,
        sections = report.section_count,
        files = report.files_written,
        elapsed_ms = report.elapsed_ms,
        "shard pipeline complete"
    );

    Ok(report)
}
