//! Pipeline orchestration and destination sink for docshard.
//!
//! Ties the pure sharding engine to the filesystem: read one source file,
//! shard it, persist the output set.

pub mod pipeline;
pub mod writer;

pub use pipeline::{ProgressReporter, ShardFileConfig, ShardReport, SilentProgress, shard_file};
