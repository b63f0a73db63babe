//! Compiled binary artifacts supplied by an external build step.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fatpack_targets::{BuildVariant, Target};

/// A compiled binary for exactly one (target, variant) pair.
///
/// Produced externally; assembly only reads the target, variant, and
/// location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// The architecture/OS combination this binary was compiled for.
    pub target: Target,
    /// The build configuration this binary belongs to.
    pub variant: BuildVariant,
    /// Filesystem location of the binary.
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(target: Target, variant: BuildVariant, path: impl Into<PathBuf>) -> Self {
        Self {
            target,
            variant,
            path: path.into(),
        }
    }
}
