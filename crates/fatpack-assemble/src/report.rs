//! Assembly report.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use fatpack_targets::{BuildVariant, Target, TargetFamily};

/// One family's contribution to the assembled bundle.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyEntry {
    /// The target family.
    pub family: TargetFamily,
    /// Contributing targets, in canonical order.
    pub targets: Vec<Target>,
    /// Whether a fat binary was produced (more than one contributor).
    pub merged: bool,
    /// The binary handed to the bundle tool.
    pub binary: PathBuf,
}

/// Summary of one bundle assembly run.
#[derive(Debug, Clone, Serialize)]
pub struct AssembleReport {
    /// Bundle name.
    pub bundle: String,
    /// Build variant assembled.
    pub variant: BuildVariant,
    /// Final bundle location.
    pub bundle_path: PathBuf,
    /// Per-family contributions, in canonical family order.
    pub families: Vec<FamilyEntry>,
    /// Total assembly duration in milliseconds.
    pub duration_ms: u64,
}

impl fmt::Display for AssembleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Assembly Report ===")?;
        writeln!(f, "Bundle:   {} ({})", self.bundle, self.variant)?;
        writeln!(f, "Output:   {}", self.bundle_path.display())?;
        writeln!(f, "Duration: {} ms", self.duration_ms)?;
        writeln!(f)?;
        writeln!(f, "--- Families ({}) ---", self.families.len())?;
        for entry in &self.families {
            let targets: Vec<&str> = entry.targets.iter().map(|t| t.name()).collect();
            writeln!(
                f,
                "  {}: {} [{}]",
                entry.family,
                if entry.merged { "fat" } else { "single" },
                targets.join(", "),
            )?;
            writeln!(f, "    -> {}", entry.binary.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssembleReport {
        AssembleReport {
            bundle: "Kit".into(),
            variant: BuildVariant::Release,
            bundle_path: PathBuf::from("out/release/Kit.xcframework"),
            families: vec![
                FamilyEntry {
                    family: TargetFamily::Macos,
                    targets: vec![Target::MacosX64, Target::MacosArm64],
                    merged: true,
                    binary: PathBuf::from("out-intermediate/release/Kit/macos/Kit.bin"),
                },
                FamilyEntry {
                    family: TargetFamily::IosDevice,
                    targets: vec![Target::IosArm64],
                    merged: false,
                    binary: PathBuf::from("bin/ios-arm64"),
                },
            ],
            duration_ms: 12,
        }
    }

    #[test]
    fn report_display() {
        let text = sample().to_string();
        assert!(text.contains("=== Assembly Report ==="));
        assert!(text.contains("Kit (release)"));
        assert!(text.contains("macos: fat [macos-x64, macos-arm64]"));
        assert!(text.contains("ios: single [ios-arm64]"));
    }

    #[test]
    fn report_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["bundle"], "Kit");
        assert_eq!(json["variant"], "release");
        assert_eq!(json["families"][0]["family"], "macos");
        assert_eq!(json["families"][0]["merged"], true);
    }
}
