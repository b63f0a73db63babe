//! Fatpack CLI — multi-architecture Apple bundle assembly.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use manifest::FatpackManifest;

#[derive(Parser)]
#[command(name = "fatpack", version, about = "Multi-architecture Apple bundle assembly")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new fatpack project
    Init {
        /// Bundle name
        name: String,
    },
    /// Merge registered artifacts and assemble the bundle
    Assemble {
        /// Build variant to assemble (e.g., release, debug)
        #[arg(long)]
        variant: Option<String>,
        /// Assemble every variant listed in fatpack.toml
        #[arg(long)]
        all_variants: bool,
        /// Override the bundle name from fatpack.toml
        #[arg(long)]
        bundle_name: Option<String>,
        /// Override the output root from fatpack.toml
        #[arg(long)]
        output_root: Option<String>,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    /// Inspect the supported target set
    Targets {
        #[command(subcommand)]
        action: TargetsAction,
    },
    /// Check toolchain and project status
    Doctor,
    /// Remove assembled bundles and intermediates
    Clean,
}

#[derive(Subcommand)]
enum TargetsAction {
    /// List supported targets grouped by family
    List,
    /// Show details of a target
    Describe {
        /// Target name (e.g., ios-simulator-arm64)
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Assemble {
            variant,
            all_variants,
            bundle_name,
            output_root,
            report,
        } => {
            let (manifest, project_dir) = load_manifest_required(&cwd)?;
            commands::assemble::run(
                &project_dir,
                &manifest,
                variant.as_deref(),
                all_variants,
                bundle_name.as_deref(),
                output_root.as_deref(),
                report.as_deref(),
            )
        }

        Commands::Targets { action } => match action {
            TargetsAction::List => commands::targets::list(),
            TargetsAction::Describe { name } => commands::targets::describe(&name),
        },

        Commands::Doctor => commands::doctor::run(&cwd),

        Commands::Clean => {
            let (manifest, project_dir) = load_manifest_required(&cwd)?;
            commands::clean::run(&project_dir, &manifest)
        }
    }
}

/// Load manifest, returning error if not found.
fn load_manifest_required(cwd: &Path) -> anyhow::Result<(FatpackManifest, PathBuf)> {
    match FatpackManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((manifest, dir)),
        None => anyhow::bail!("no fatpack.toml found (run `fatpack init` first)"),
    }
}
