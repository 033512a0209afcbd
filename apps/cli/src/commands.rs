//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use docshard_core::pipeline::{ProgressReporter, ShardFileConfig, ShardReport, shard_file};
use docshard_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docshard — split large markdown documents into navigable pieces.
#[derive(Parser)]
#[command(
    name = "docshard",
    version,
    about = "Shard a structured markdown document into per-section files plus a navigable index.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Shard a single markdown file.
    Shard {
        /// Path to the source markdown file.
        source: String,

        /// Destination directory (defaults to a directory named after the
        /// source file, next to it).
        #[arg(short, long)]
        out: Option<String>,

        /// Print the run report as JSON instead of the summary block.
        #[arg(long)]
        json: bool,
    },

    /// Shard a document registered in the config by name.
    Doc {
        /// Registered document name (e.g. prd, architecture).
        name: String,

        /// Print the run report as JSON instead of the summary block.
        #[arg(long)]
        json: bool,
    },

    /// Shard every document registered in the config.
    All,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize the user config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docshard=info",
        1 => "docshard=debug",
        _ => "docshard=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Shard { source, out, json } => cmd_shard(&source, out.as_deref(), json).await,
        Command::Doc { name, json } => cmd_doc(&name, json).await,
        Command::All => cmd_all().await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_shard(source: &str, out: Option<&str>, json: bool) -> Result<()> {
    let source_path = PathBuf::from(source);

    let dest = match out {
        Some(p) => PathBuf::from(p),
        None => default_dest(&source_path)?,
    };

    info!(source, dest = %dest.display(), "sharding document");
    run_one(source_path, dest, json).await
}

async fn cmd_doc(name: &str, json: bool) -> Result<()> {
    let config = load_config()?;

    let entry = config
        .documents
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| eyre!("document '{name}' is not registered in docshard.toml"))?;

    info!(name, source = %entry.source, "sharding registered document");
    let dest = entry.resolved_dest(&config.defaults);
    run_one(PathBuf::from(&entry.source), dest, json).await
}

async fn cmd_all() -> Result<()> {
    let config = load_config()?;

    if config.documents.is_empty() {
        return Err(eyre!(
            "no documents registered — add [[documents]] entries to docshard.toml"
        ));
    }

    for entry in &config.documents {
        info!(name = %entry.name, source = %entry.source, "sharding registered document");
        let dest = entry.resolved_dest(&config.defaults);
        run_one(PathBuf::from(&entry.source), dest, false).await?;
    }

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

/// Default destination: a directory named after the source file stem,
/// next to the source (e.g. `docs/prd.md` → `docs/prd/`).
fn default_dest(source: &Path) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| eyre!("cannot derive a destination from '{}'", source.display()))?;

    Ok(source.parent().unwrap_or(Path::new(".")).join(stem))
}

/// Shard one document with progress reporting and a printed summary.
async fn run_one(source: PathBuf, dest: PathBuf, json: bool) -> Result<()> {
    let config = ShardFileConfig { source, dest };
    let reporter = CliProgress::new();

    let report = shard_file(&config, &reporter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("  Document sharded successfully!");
    println!("  Title:    {}", report.document_title);
    println!("  Level:    {}", report.split_level);
    println!("  Sections: {}", report.section_count);
    println!("  Files:    {}", report.files_written);
    println!("  Path:     {}", report.dest.display());
    println!("  Time:     {}ms", report.elapsed_ms);
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _report: &ShardReport) {
        self.spinner.finish_and_clear();
    }
}
