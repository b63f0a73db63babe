//! Error types for target model operations.

use crate::target::Target;

/// Errors that can occur when classifying or parsing targets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    /// Target's OS is not one of the four bundleable Apple families.
    #[error("unsupported target '{target}': bundling is defined only for macOS, iOS, watchOS, and tvOS binaries")]
    UnsupportedTarget {
        /// The target that could not be classified.
        target: Target,
    },

    /// Target name did not match any known target.
    #[error("unknown target: '{name}'")]
    UnknownTarget {
        /// The unrecognized name.
        name: String,
    },

    /// Build variant name did not match any known variant.
    #[error("unknown build variant: '{name}' (expected 'debug' or 'release')")]
    UnknownVariant {
        /// The unrecognized name.
        name: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
