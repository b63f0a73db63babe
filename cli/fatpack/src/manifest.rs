//! `fatpack.toml` manifest parsing and project configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fatpack_assemble::{Artifact, ToolConfig};
use fatpack_targets::{BuildVariant, Target};

/// The top-level manifest structure for a fatpack project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatpackManifest {
    /// Bundle configuration (required).
    pub bundle: BundleSection,
    /// External tool overrides.
    #[serde(default)]
    pub tools: ToolConfig,
    /// Registered artifacts: variant name -> target name -> binary path.
    #[serde(default)]
    pub artifacts: BTreeMap<String, BTreeMap<String, PathBuf>>,
}

/// Bundle configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BundleSection {
    /// Bundle name (required).
    pub name: String,
    /// Parent directory for assembled bundles, relative to the project.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Variants to assemble with `--all-variants`; the first is the default.
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

fn default_output_root() -> PathBuf {
    PathBuf::from("out")
}

fn default_variants() -> Vec<String> {
    vec!["release".to_string()]
}

impl FatpackManifest {
    /// Search upward from `start_dir` for a `fatpack.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("fatpack.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: FatpackManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing fatpack.toml")
    }

    /// Resolve every registered artifact into a typed triple.
    pub fn collect_artifacts(&self) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();
        for (variant_name, entries) in &self.artifacts {
            let variant: BuildVariant = variant_name
                .parse()
                .with_context(|| format!("in [artifacts.{variant_name}]"))?;
            for (target_name, path) in entries {
                let target: Target = target_name
                    .parse()
                    .with_context(|| format!("in [artifacts.{variant_name}]"))?;
                artifacts.push(Artifact::new(target, variant, path.clone()));
            }
        }
        Ok(artifacts)
    }

    /// Parse the manifest's variant list.
    pub fn variants(&self) -> Result<Vec<BuildVariant>> {
        self.bundle
            .variants
            .iter()
            .map(|name| {
                name.parse::<BuildVariant>()
                    .with_context(|| "in [bundle] variants".to_string())
            })
            .collect()
    }

    /// Generate the default template for `fatpack init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[bundle]
name = "{name}"
output-root = "out"
variants = ["release", "debug"]

[tools]
merge-tool = "lipo"
bundle-tool = "xcodebuild"

# Register the binaries your build produces, per variant and target:
#
# [artifacts.release]
# macos-x64 = "build/bin/macos-x64/{name}"
# macos-arm64 = "build/bin/macos-arm64/{name}"
"#
        )
    }
}
