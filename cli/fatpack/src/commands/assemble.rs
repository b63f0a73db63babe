//! `fatpack assemble` — group, merge, and bundle compiled artifacts.

use std::path::Path;

use anyhow::{bail, Context, Result};

use fatpack_assemble::{assemble, AssembleConfig, SystemRunner};
use fatpack_targets::BuildVariant;

use crate::manifest::FatpackManifest;

/// Run bundle assembly for the requested variant(s).
pub fn run(
    project_dir: &Path,
    manifest: &FatpackManifest,
    variant: Option<&str>,
    all_variants: bool,
    bundle_name: Option<&str>,
    output_root: Option<&str>,
    report: Option<&str>,
) -> Result<()> {
    let variants = resolve_variants(variant, all_variants, manifest)?;
    let artifacts = manifest.collect_artifacts()?;

    let bundle_name = bundle_name.unwrap_or(&manifest.bundle.name);
    let output_root = match output_root {
        Some(path) => project_dir.join(path),
        None => project_dir.join(&manifest.bundle.output_root),
    };

    let runner = SystemRunner;
    for variant in variants {
        let config = AssembleConfig {
            bundle_name: bundle_name.to_string(),
            variant,
            output_root: output_root.clone(),
            tools: manifest.tools.clone(),
        };

        let output = assemble(&artifacts, &config, &runner)
            .with_context(|| format!("assembling '{bundle_name}' ({variant})"))?;

        match report {
            Some("json") => println!("{}", serde_json::to_string_pretty(&output.report)?),
            None | Some("human") => {
                print!("{}", output.report);
                println!();
                println!("Bundle: {}", output.bundle_path.display());
            }
            Some(other) => bail!("unknown report format: '{other}'. Choose: human, json"),
        }
    }

    Ok(())
}

/// Resolve which variants to assemble from flags and the manifest.
fn resolve_variants(
    variant: Option<&str>,
    all_variants: bool,
    manifest: &FatpackManifest,
) -> Result<Vec<BuildVariant>> {
    // --variant takes precedence (single variant)
    if let Some(name) = variant {
        let parsed: BuildVariant = name.parse()?;
        return Ok(vec![parsed]);
    }

    let listed = manifest.variants()?;
    if listed.is_empty() {
        bail!("no variants listed in [bundle] of fatpack.toml");
    }

    if all_variants {
        Ok(listed)
    } else {
        // Manifest default: the first listed variant.
        Ok(vec![listed[0]])
    }
}
