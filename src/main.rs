//! lodgen - batch LOD texture generator

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lodgen::config::RunConfig;
use lodgen::lod::{ALLOWED_SIZES, DEFAULT_LOD_COUNT, DEFAULT_LOD_SIZES, FIXED_LOD_SIZES};
use lodgen::worker::{self, JobSummary, ProgressUpdate};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lodgen")]
#[command(version)]
#[command(about = "Generate and clean up LOD copies of PNG textures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use RUST_LOG=debug for more detail)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate LOD copies for every PNG in a folder
    Generate {
        /// Folder containing the PNG textures
        folder: PathBuf,

        /// Number of LOD levels (1-9, default 4)
        #[arg(short, long)]
        lods: Option<usize>,

        /// Size per level, largest first (e.g. 2048,512,128)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Vec<String>,

        /// Skip textures whose name contains "norm"
        #[arg(long)]
        skip_normals: bool,

        /// Use the fixed preset: 1024, 256, 64, 16 without normal maps
        #[arg(long, conflicts_with_all = ["lods", "sizes", "skip_normals"])]
        fixed: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete previously generated LOD files in a folder
    Delete {
        /// Folder containing the PNG textures
        folder: PathBuf,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List allowed LOD sizes and the per-level defaults
    Sizes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only initialize logging if verbose or RUST_LOG is set
    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive(if cli.verbose { "lodgen=debug".parse()? } else { "lodgen=warn".parse()? }),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Generate {
            folder,
            lods,
            sizes,
            skip_normals,
            fixed,
            json,
        } => {
            let config = if fixed {
                RunConfig::fixed(folder)
            } else {
                let count = lods.unwrap_or(if sizes.is_empty() {
                    DEFAULT_LOD_COUNT
                } else {
                    sizes.len()
                });
                RunConfig::configurable(folder, count, sizes.as_slice(), !skip_normals)?
            };

            let job = config.into_job()?;
            println!("\n=== Starting processing ===\n");
            run_job(job, json)?;
        }

        Commands::Delete { folder, json } => {
            let job = RunConfig::delete(folder).into_job()?;
            println!("\n=== Removing generated LODs ===\n");
            run_job(job, json)?;
        }

        Commands::Sizes => {
            let allowed: Vec<String> = ALLOWED_SIZES.iter().map(|s| s.to_string()).collect();
            println!("Allowed sizes: {}", allowed.join(", "));
            println!("Default LOD count: {}", DEFAULT_LOD_COUNT);
            println!("\n=== Default size per level ===");
            for (idx, size) in DEFAULT_LOD_SIZES.iter().enumerate() {
                println!("  LOD{}: {}", idx + 1, size);
            }
            let fixed: Vec<String> = FIXED_LOD_SIZES.iter().map(|s| s.to_string()).collect();
            println!("\nFixed preset: {}", fixed.join(", "));
        }
    }

    Ok(())
}

/// Run a job on the worker thread and print its progress here
fn run_job(job: worker::Job, json: bool) -> Result<()> {
    let handle = worker::spawn(job);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Working...");

    for update in handle.updates.iter() {
        match update {
            ProgressUpdate::Status(line) => spinner.println(line),
            ProgressUpdate::Complete => break,
        }
    }
    spinner.finish_and_clear();

    let summary = handle.join()?;
    if json {
        let text = match summary {
            JobSummary::Generate(s) => serde_json::to_string_pretty(&s)?,
            JobSummary::Delete(s) => serde_json::to_string_pretty(&s)?,
        };
        println!("{}", text);
    }

    Ok(())
}
