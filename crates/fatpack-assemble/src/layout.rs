//! Deterministic output path computation.
//!
//! Final bundles live at `<output-root>/<variant>/<bundle-name>.<ext>` and
//! merged per-family fat binaries at
//! `<output-root>-intermediate/<variant>/<bundle-name>/<family>/<bundle-name>.<ext>`.
//! Paths are keyed only by (variant, family, bundle name) so repeated
//! assemblies with identical inputs resolve to identical locations, and
//! concurrent assemblies of different (bundle, variant) pairs never collide.

use std::path::{Path, PathBuf};

use fatpack_targets::{BuildVariant, TargetFamily};

/// Final bundle location for one (bundle, variant) pair.
pub fn bundle_path(
    output_root: &Path,
    variant: BuildVariant,
    bundle_name: &str,
    bundle_extension: &str,
) -> PathBuf {
    output_root
        .join(variant.name())
        .join(format!("{bundle_name}.{bundle_extension}"))
}

/// Staging location the bundle tool writes into before the final swap.
///
/// A sibling of the final path, so the rename stays on one filesystem.
pub fn staging_path(bundle_path: &Path) -> PathBuf {
    let mut name = bundle_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".staging");
    bundle_path.with_file_name(name)
}

/// Root directory for merged fat binaries: `<output-root>-intermediate`.
pub fn intermediate_root(output_root: &Path) -> PathBuf {
    let mut os = output_root.as_os_str().to_os_string();
    os.push("-intermediate");
    PathBuf::from(os)
}

/// Merged fat-binary location for one (variant, bundle, family) triple.
pub fn merged_binary_path(
    output_root: &Path,
    variant: BuildVariant,
    bundle_name: &str,
    family: TargetFamily,
    binary_extension: &str,
) -> PathBuf {
    intermediate_root(output_root)
        .join(variant.name())
        .join(bundle_name)
        .join(family.name())
        .join(format!("{bundle_name}.{binary_extension}"))
}
