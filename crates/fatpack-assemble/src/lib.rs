//! Fat-binary merge and bundle assembly for the fatpack bundler.
//!
//! Turns a set of per-target compiled binaries into one multi-platform
//! bundle per build variant through a three-stage pipeline: group artifacts
//! by target family, merge multi-architecture groups into fat binaries with
//! an external merge tool, then assemble the final bundle directory with an
//! external bundle tool and swap it into place.

pub mod artifact;
pub mod error;
pub mod group;
pub mod layout;
pub mod merge;
pub mod pipeline;
pub mod report;
pub mod tool;

pub use artifact::Artifact;
pub use error::{AssembleError, Result};
pub use group::{group, FamilyGroup};
pub use merge::{merge_group, MergedBinary};
pub use pipeline::{assemble, AssembleConfig, AssembleOutput};
pub use report::{AssembleReport, FamilyEntry};
pub use tool::{SystemRunner, ToolConfig, ToolOutput, ToolRunner};
