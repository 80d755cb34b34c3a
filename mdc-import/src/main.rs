//! mdc-import - content import CLI
//!
//! Converts XML content exports into NDJSON files for bulk dataset import,
//! or writes organizations straight into the content store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdc_common::config::{self, TomlConfig};
use mdc_import::services::{self, FileScanner, SanityClient, StoreSettings};
use mdc_import::{BatchRunner, EntityKind, ImportSummary};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const INPUT_ROOT_ENV: &str = "MDC_INPUT_ROOT";
const OUTPUT_DIR_ENV: &str = "MDC_OUTPUT_DIR";
const DEFAULT_INPUT_ROOT: &str = "schemaTypes";
const DEFAULT_OUTPUT_DIR: &str = ".";

/// Command-line arguments for mdc-import
#[derive(Parser, Debug)]
#[command(name = "mdc-import")]
#[command(about = "Convert XML content exports into content-store documents")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true, env = config::CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Log level (overrides RUST_LOG and the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory holding the per-kind source folders
    #[arg(long, global = true)]
    input_root: Option<PathBuf>,

    /// Directory receiving NDJSON files
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one entity kind to an NDJSON file
    Convert {
        #[arg(value_enum)]
        kind: EntityKind,

        /// Source directory (default: <input-root>/<kind folder>)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: <output-dir>/<kind>.ndjson)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Convert all four entity kinds
    ConvertAll,

    /// Create or replace documents directly in the content store
    Upsert {
        #[command(subcommand)]
        target: UpsertTarget,
    },

    /// List the organizations an upsert would write
    Preview {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show the key fields of one organization file
    Inspect { file: PathBuf },
}

#[derive(Subcommand, Debug)]
enum UpsertTarget {
    Organizations {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Paths resolved from CLI, environment and config file
struct Locations {
    input_root: PathBuf,
    output_dir: PathBuf,
}

impl Locations {
    fn resolve(args: &Args, toml: &TomlConfig) -> Self {
        Self {
            input_root: config::resolve_path(
                args.input_root.as_deref(),
                INPUT_ROOT_ENV,
                toml.input_root.as_deref(),
                DEFAULT_INPUT_ROOT,
            ),
            output_dir: config::resolve_path(
                args.output_dir.as_deref(),
                OUTPUT_DIR_ENV,
                toml.output_dir.as_deref(),
                DEFAULT_OUTPUT_DIR,
            ),
        }
    }

    fn input_dir(&self, kind: EntityKind, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.input_root.join(kind.default_input_dir()))
    }

    fn output_file(&self, kind: EntityKind, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output_dir.join(kind.default_output_file()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let toml = config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(args.log_level.as_deref(), &toml.logging.level);
    info!("mdc-import {}", env!("CARGO_PKG_VERSION"));

    let locations = Locations::resolve(&args, &toml);

    match &args.command {
        Command::Convert {
            kind,
            input,
            output,
            recursive,
        } => {
            let mut runner = BatchRunner::new(*kind);
            if *recursive {
                runner = runner.with_scanner(FileScanner::recursive());
            }
            let output = locations.output_file(*kind, output.as_deref());
            convert(&runner, &locations.input_dir(*kind, input.as_deref()), &output, &toml)?;
        }

        Command::ConvertAll => {
            let mut fatal = Vec::new();
            for kind in EntityKind::ALL {
                let runner = BatchRunner::new(kind);
                let input = locations.input_dir(kind, None);
                let output = locations.output_file(kind, None);
                if let Err(e) = convert(&runner, &input, &output, &toml) {
                    error!("{} conversion aborted: {:#}", kind.plural(), e);
                    fatal.push(kind.plural());
                }
            }
            if !fatal.is_empty() {
                anyhow::bail!("Conversion aborted for: {}", fatal.join(", "));
            }
        }

        Command::Upsert {
            target: UpsertTarget::Organizations { input },
        } => {
            let settings = StoreSettings::resolve(&toml.sanity).context("Content store is not configured")?;
            info!(
                project = %settings.project_id,
                dataset = %settings.dataset,
                "Writing organizations to content store"
            );
            let client = SanityClient::new(settings).context("Failed to create store client")?;

            let kind = EntityKind::Organization;
            let summary = BatchRunner::new(kind)
                .upsert_all(&client, &locations.input_dir(kind, input.as_deref()))
                .await
                .context("Import aborted")?;
            print!("{}", summary.render());
        }

        Command::Preview { input } => {
            let kind = EntityKind::Organization;
            let rows = services::preview_rows(&locations.input_dir(kind, input.as_deref()), &FileScanner::flat())
                .context("Preview failed")?;
            println!("{}", services::render_preview(&rows));
        }

        Command::Inspect { file } => {
            let report = services::inspect_organization(file)
                .with_context(|| format!("Failed to inspect {}", file.display()))?;
            print!("{}", report);
            println!("\n✓ Parsing successful!");
        }
    }

    Ok(())
}

/// Bulk conversion of one kind, printing the summary
fn convert(runner: &BatchRunner, input: &Path, output: &Path, toml: &TomlConfig) -> Result<ImportSummary> {
    let summary = runner
        .convert_to_ndjson(input, output)
        .with_context(|| format!("Failed to convert {}", runner.kind().plural()))?;

    print!("{}", summary.render());
    println!(
        "\nTo import, run: npx sanity dataset import {} {}\n",
        output.display(),
        services::sanity_client::resolve_dataset(&toml.sanity)
    );

    Ok(summary)
}

/// Install the fmt subscriber: `--log-level` > `RUST_LOG` > config level
fn init_tracing(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config_level)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
