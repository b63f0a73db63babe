//! External tool invocation seam.
//!
//! Merging and bundling delegate to platform tools (a lipo-style fat-binary
//! combiner and a bundle creator). The `ToolRunner` trait isolates the
//! child-process call so the assembly pipeline can be exercised without the
//! tools installed.

use std::ffi::OsString;
use std::process::Command;

use serde::{Deserialize, Serialize};

/// Names and extensions of the external tools used by assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToolConfig {
    /// Fat-binary combiner, invoked as `<tool> <bin>... -output <path>`.
    pub merge_tool: String,
    /// Bundle creator, invoked as
    /// `<tool> -create-bundle -binary <path>... -output <path>`.
    pub bundle_tool: String,
    /// Extension of the final bundle directory.
    pub bundle_extension: String,
    /// Extension of merged per-family fat binaries.
    pub binary_extension: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            merge_tool: "lipo".into(),
            bundle_tool: "xcodebuild".into(),
            bundle_extension: "xcframework".into(),
            binary_extension: "bin".into(),
        }
    }
}

/// Captured outcome of one tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Whether the tool exited with status 0.
    pub success: bool,
    /// Human-readable exit status (e.g., "exit status: 1").
    pub status: String,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Blocking, synchronous invocation of an external tool.
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    fn run(&self, program: &str, args: &[OsString]) -> std::io::Result<ToolOutput>;
}

/// Runs tools as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> std::io::Result<ToolOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tool_config() {
        let config = ToolConfig::default();
        assert_eq!(config.merge_tool, "lipo");
        assert_eq!(config.bundle_tool, "xcodebuild");
        assert_eq!(config.bundle_extension, "xcframework");
        assert_eq!(config.binary_extension, "bin");
    }

    #[test]
    fn tool_config_partial_toml_fills_defaults() {
        let config: ToolConfig = toml::from_str("merge-tool = \"my-lipo\"").unwrap();
        assert_eq!(config.merge_tool, "my-lipo");
        assert_eq!(config.bundle_tool, "xcodebuild");
    }

    #[test]
    fn system_runner_reports_missing_tool() {
        let runner = SystemRunner;
        let result = runner.run("fatpack-no-such-tool", &[]);
        assert!(result.is_err());
    }
}
