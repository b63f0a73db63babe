//! Per-family fat-binary merging.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use fatpack_targets::BuildVariant;

use crate::error::{AssembleError, Result};
use crate::group::FamilyGroup;
use crate::layout;
use crate::tool::{ToolConfig, ToolRunner};

/// The binary contributed by one family to the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedBinary {
    /// Exactly one target contributed; the artifact is used unchanged.
    Single(PathBuf),
    /// Two or more targets contributed; a fat binary was produced at the
    /// deterministic intermediate location.
    Fat(PathBuf),
}

impl MergedBinary {
    pub fn path(&self) -> &Path {
        match self {
            MergedBinary::Single(path) | MergedBinary::Fat(path) => path,
        }
    }

    pub fn is_fat(&self) -> bool {
        matches!(self, MergedBinary::Fat(_))
    }
}

/// Merge one family group into a single binary location.
///
/// An empty group contributes nothing (`None`). A singleton group is the
/// identity: the artifact's own path, no tool run, no intermediate file.
/// Larger groups invoke the external merge tool
/// (`<tool> <bin>... -output <merged>`), writing to the path keyed by
/// (variant, family, bundle name).
pub fn merge_group(
    group: &FamilyGroup,
    variant: BuildVariant,
    bundle_name: &str,
    output_root: &Path,
    tools: &ToolConfig,
    runner: &dyn ToolRunner,
) -> Result<Option<MergedBinary>> {
    match group.artifacts.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(MergedBinary::Single(single.path.clone()))),
        members => {
            let merged = layout::merged_binary_path(
                output_root,
                variant,
                bundle_name,
                group.family,
                &tools.binary_extension,
            );
            if let Some(parent) = merged.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut args: Vec<OsString> = members
                .iter()
                .map(|a| a.path.clone().into_os_string())
                .collect();
            args.push("-output".into());
            args.push(merged.clone().into_os_string());

            let output =
                runner
                    .run(&tools.merge_tool, &args)
                    .map_err(|e| AssembleError::MergeTool {
                        tool: tools.merge_tool.clone(),
                        family: group.family,
                        detail: format!("failed to invoke: {e}"),
                    })?;
            if !output.success {
                return Err(AssembleError::MergeTool {
                    tool: tools.merge_tool.clone(),
                    family: group.family,
                    detail: format!("{}: {}", output.status, output.stderr.trim()),
                });
            }

            Ok(Some(MergedBinary::Fat(merged)))
        }
    }
}
