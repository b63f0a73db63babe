//! Target and target-family model for the fatpack bundler.
//!
//! A `Target` is one compiled architecture/OS combination. Apple targets
//! group into disjoint `TargetFamily` values (device vs. simulator per OS),
//! which drive fat-binary merging and bundle layout. `BuildVariant` is the
//! orthogonal debug/release axis.

pub mod error;
pub mod family;
pub mod target;
pub mod variant;

pub use error::{Result, TargetError};
pub use family::{classify, TargetFamily};
pub use target::{OsFamily, Target};
pub use variant::BuildVariant;
