//! Assembly errors.

use fatpack_targets::{BuildVariant, TargetError, TargetFamily};
use thiserror::Error;

/// Errors that can occur during bundle assembly.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// No family has any contributing artifact for the requested variant.
    #[error("no artifacts to bundle for variant '{variant}' of bundle '{bundle}'")]
    NoArtifacts {
        bundle: String,
        variant: BuildVariant,
    },

    /// Classification failed for an input artifact's target.
    #[error(transparent)]
    Target(#[from] TargetError),

    /// The external merge tool failed or could not be invoked.
    #[error("merge tool '{tool}' failed for family '{family}': {detail}")]
    MergeTool {
        tool: String,
        family: TargetFamily,
        detail: String,
    },

    /// The external bundle tool failed or could not be invoked.
    #[error("bundle tool '{tool}' failed for bundle '{bundle}': {detail}")]
    BundleTool {
        tool: String,
        bundle: String,
        detail: String,
    },

    /// Filesystem error preparing or swapping bundle directories.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssembleError>;
