//! Shared types, error model, and configuration for docshard.
//!
//! This crate is the foundation depended on by the other docshard crates.
//! It provides:
//! - [`ShardError`] — the unified error type
//! - Domain types ([`SplitLevel`], [`Section`], [`PartitionResult`], [`OutputFile`])
//! - Configuration ([`AppConfig`], document registry, config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, DocumentEntry, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{Result, ShardError};
pub use types::{INDEX_FILE, OutputFile, PartitionResult, Section, ShardOutput, SplitLevel};
