//! `fatpack doctor` — toolchain diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use crate::manifest::FatpackManifest;

/// Print toolchain diagnostic information.
pub fn run(project_dir: &Path) -> Result<()> {
    println!("=== Fatpack Doctor ===");
    println!();

    println!("Fatpack version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let manifest = FatpackManifest::find_and_load(project_dir)?;
    let tools = manifest
        .as_ref()
        .map(|(m, _)| m.tools.clone())
        .unwrap_or_default();

    println!("--- External Tools ---");
    print_tool_status(&tools.merge_tool, &["-version"]);
    print_tool_status(&tools.bundle_tool, &["-version"]);
    println!();

    println!("--- Project Status ---");
    match manifest {
        Some((manifest, dir)) => {
            println!("  fatpack.toml: found at {}", dir.display());
            println!("  Bundle:       {}", manifest.bundle.name);
            println!(
                "  Output root:  {}",
                manifest.bundle.output_root.display()
            );
            println!("  Variants:     {}", manifest.bundle.variants.join(", "));
            for (variant, entries) in &manifest.artifacts {
                println!("  Artifacts:    {} for '{variant}'", entries.len());
            }
            if let Err(e) = manifest.collect_artifacts() {
                println!("  Warning:      {e:#}");
            }
        }
        None => {
            println!("  fatpack.toml: not found (run `fatpack init` first)");
        }
    }

    Ok(())
}

fn print_tool_status(name: &str, args: &[&str]) {
    match Command::new(name).args(args).output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {name}: {first_line}");
        }
        Err(_) => {
            println!("  {name}: not found");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn doctor_runs_without_error() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path()).unwrap();
    }

    #[test]
    fn doctor_runs_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("fatpack.toml"),
            "[bundle]\nname = \"Kit\"\n",
        )
        .unwrap();
        super::run(dir.path()).unwrap();
    }
}
