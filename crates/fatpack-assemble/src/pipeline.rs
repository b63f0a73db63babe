//! Bundle assembly orchestrator.
//!
//! Runs the full pipeline for one (bundle, variant) pair: group artifacts
//! by family, merge multi-architecture groups into fat binaries, then
//! invoke the bundle tool and swap the result into the final location.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use fatpack_targets::BuildVariant;

use crate::artifact::Artifact;
use crate::error::{AssembleError, Result};
use crate::group::group;
use crate::layout;
use crate::merge::merge_group;
use crate::report::{AssembleReport, FamilyEntry};
use crate::tool::{ToolConfig, ToolRunner};

/// Configuration for one bundle assembly.
#[derive(Debug, Clone)]
pub struct AssembleConfig {
    /// Bundle name (the output is `<bundle_name>.<bundle_extension>`).
    pub bundle_name: String,
    /// Build variant to assemble.
    pub variant: BuildVariant,
    /// Parent directory for final bundles.
    pub output_root: PathBuf,
    /// External tool names and extensions.
    pub tools: ToolConfig,
}

/// Output of a successful assembly run.
#[derive(Debug)]
pub struct AssembleOutput {
    /// Final bundle location.
    pub bundle_path: PathBuf,
    /// Assembly report.
    pub report: AssembleReport,
}

/// Assemble a multi-platform bundle from per-target artifacts.
///
/// The bundle tool writes into a staging directory next to the final path;
/// only after it succeeds is any pre-existing bundle removed and the staging
/// directory renamed into place. A failed run therefore leaves a previous
/// bundle intact. The remove+rename pair itself is not atomic: an interrupt
/// between the two steps leaves no bundle, and the next run starts clean.
///
/// Concurrent assemblies are safe for distinct (bundle, variant) pairs:
/// final, staging, and intermediate paths are all namespaced by variant and
/// bundle name.
pub fn assemble(
    artifacts: &[Artifact],
    config: &AssembleConfig,
    runner: &dyn ToolRunner,
) -> Result<AssembleOutput> {
    let start = Instant::now();

    let groups = group(artifacts, config.variant)?;
    if groups.is_empty() {
        return Err(AssembleError::NoArtifacts {
            bundle: config.bundle_name.clone(),
            variant: config.variant,
        });
    }

    let mut families = Vec::new();
    for g in &groups {
        let Some(binary) = merge_group(
            g,
            config.variant,
            &config.bundle_name,
            &config.output_root,
            &config.tools,
            runner,
        )?
        else {
            continue;
        };
        families.push(FamilyEntry {
            family: g.family,
            targets: g.artifacts.iter().map(|a| a.target).collect(),
            merged: binary.is_fat(),
            binary: binary.path().to_path_buf(),
        });
    }

    let bundle_path = layout::bundle_path(
        &config.output_root,
        config.variant,
        &config.bundle_name,
        &config.tools.bundle_extension,
    );
    let staging = layout::staging_path(&bundle_path);
    if let Some(parent) = bundle_path.parent() {
        fs::create_dir_all(parent)?;
    }
    remove_existing(&staging)?;

    let mut args: Vec<OsString> = vec!["-create-bundle".into()];
    for entry in &families {
        args.push("-binary".into());
        args.push(entry.binary.clone().into_os_string());
    }
    args.push("-output".into());
    args.push(staging.clone().into_os_string());

    let output = runner
        .run(&config.tools.bundle_tool, &args)
        .map_err(|e| AssembleError::BundleTool {
            tool: config.tools.bundle_tool.clone(),
            bundle: config.bundle_name.clone(),
            detail: format!("failed to invoke: {e}"),
        })?;
    if !output.success {
        return Err(AssembleError::BundleTool {
            tool: config.tools.bundle_tool.clone(),
            bundle: config.bundle_name.clone(),
            detail: format!("{}: {}", output.status, output.stderr.trim()),
        });
    }

    remove_existing(&bundle_path)?;
    fs::rename(&staging, &bundle_path)?;

    let report = AssembleReport {
        bundle: config.bundle_name.clone(),
        variant: config.variant,
        bundle_path: bundle_path.clone(),
        families,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    Ok(AssembleOutput {
        bundle_path,
        report,
    })
}

/// Remove a file or directory if present.
fn remove_existing(path: &Path) -> std::io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
