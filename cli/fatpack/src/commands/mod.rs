//! CLI command implementations.

pub mod assemble;
pub mod clean;
pub mod doctor;
pub mod init;
pub mod targets;
