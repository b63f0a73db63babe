//! Target families and the classification table.
//!
//! A family is one user-facing platform variant of a bundle: all device
//! targets of an OS, or all simulator targets of an OS. Families are
//! disjoint and together cover every Apple target. `TargetFamily::ALL` is
//! the canonical enumeration order used for bundle assembly, and each
//! family's `targets()` list is the canonical merge order within a family.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};
use crate::target::Target;

/// A named group of related targets forming one platform entry of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFamily {
    Macos,
    IosDevice,
    IosSimulator,
    WatchosDevice,
    WatchosSimulator,
    TvosDevice,
    TvosSimulator,
}

impl TargetFamily {
    /// Every family, in canonical enumeration order.
    pub const ALL: [TargetFamily; 7] = [
        TargetFamily::Macos,
        TargetFamily::IosDevice,
        TargetFamily::IosSimulator,
        TargetFamily::WatchosDevice,
        TargetFamily::WatchosSimulator,
        TargetFamily::TvosDevice,
        TargetFamily::TvosSimulator,
    ];

    /// Stable kebab-case name, also used as the intermediate directory name.
    pub fn name(&self) -> &'static str {
        match self {
            TargetFamily::Macos => "macos",
            TargetFamily::IosDevice => "ios",
            TargetFamily::IosSimulator => "ios-simulator",
            TargetFamily::WatchosDevice => "watchos",
            TargetFamily::WatchosSimulator => "watchos-simulator",
            TargetFamily::TvosDevice => "tvos",
            TargetFamily::TvosSimulator => "tvos-simulator",
        }
    }

    /// Member targets in canonical merge order.
    pub fn targets(&self) -> &'static [Target] {
        match self {
            TargetFamily::Macos => &[Target::MacosX64, Target::MacosArm64],
            TargetFamily::IosDevice => &[Target::IosArm32, Target::IosArm64],
            TargetFamily::IosSimulator => &[Target::IosX64, Target::IosSimulatorArm64],
            TargetFamily::WatchosDevice => &[Target::WatchosArm32, Target::WatchosArm64],
            TargetFamily::WatchosSimulator => {
                &[Target::WatchosX64, Target::WatchosSimulatorArm64]
            }
            TargetFamily::TvosDevice => &[Target::TvosArm64],
            TargetFamily::TvosSimulator => &[Target::TvosX64, Target::TvosSimulatorArm64],
        }
    }

    /// Position of a target within this family's canonical order.
    pub fn canonical_index(&self, target: Target) -> Option<usize> {
        self.targets().iter().position(|t| *t == target)
    }
}

impl fmt::Display for TargetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetFamily {
    type Err = TargetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TargetFamily::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| TargetError::UnknownTarget { name: s.to_string() })
    }
}

/// Classify a target into its family.
///
/// Total over the closed target set: every Apple target maps to exactly one
/// family, and every non-Apple target fails with
/// [`TargetError::UnsupportedTarget`]. The match is exhaustive so that a new
/// target variant is a compile error here rather than a silent gap.
pub fn classify(target: Target) -> Result<TargetFamily> {
    match target {
        Target::MacosX64 | Target::MacosArm64 => Ok(TargetFamily::Macos),
        Target::IosArm32 | Target::IosArm64 => Ok(TargetFamily::IosDevice),
        Target::IosX64 | Target::IosSimulatorArm64 => Ok(TargetFamily::IosSimulator),
        Target::WatchosArm32 | Target::WatchosArm64 => Ok(TargetFamily::WatchosDevice),
        Target::WatchosX64 | Target::WatchosSimulatorArm64 => Ok(TargetFamily::WatchosSimulator),
        Target::TvosArm64 => Ok(TargetFamily::TvosDevice),
        Target::TvosX64 | Target::TvosSimulatorArm64 => Ok(TargetFamily::TvosSimulator),
        Target::LinuxX64
        | Target::LinuxArm64
        | Target::MingwX64
        | Target::AndroidArm64
        | Target::AndroidX64 => Err(TargetError::UnsupportedTarget { target }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_total_over_apple_targets() {
        for target in Target::ALL {
            let result = classify(target);
            if target.is_apple() {
                assert!(result.is_ok(), "{target} should classify");
            } else {
                assert_eq!(result, Err(TargetError::UnsupportedTarget { target }));
            }
        }
    }

    #[test]
    fn families_are_disjoint() {
        for (i, a) in TargetFamily::ALL.iter().enumerate() {
            for b in &TargetFamily::ALL[i + 1..] {
                for t in a.targets() {
                    assert!(
                        !b.targets().contains(t),
                        "{t} appears in both {a} and {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn families_cover_all_apple_targets() {
        for target in Target::ALL.iter().filter(|t| t.is_apple()) {
            let family = classify(*target).unwrap();
            assert!(
                family.targets().contains(target),
                "{target} classified into {family} but is not a member"
            );
        }
    }

    #[test]
    fn membership_matches_classification() {
        for family in TargetFamily::ALL {
            for target in family.targets() {
                assert_eq!(classify(*target).unwrap(), family);
            }
        }
    }

    #[test]
    fn canonical_index_is_stable() {
        assert_eq!(
            TargetFamily::Macos.canonical_index(Target::MacosX64),
            Some(0)
        );
        assert_eq!(
            TargetFamily::Macos.canonical_index(Target::MacosArm64),
            Some(1)
        );
        assert_eq!(TargetFamily::Macos.canonical_index(Target::IosArm64), None);
    }

    #[test]
    fn family_names_round_trip() {
        for family in TargetFamily::ALL {
            let parsed: TargetFamily = family.name().parse().unwrap();
            assert_eq!(parsed, family);
        }
    }

    #[test]
    fn device_and_simulator_split() {
        for family in TargetFamily::ALL {
            let simulator = matches!(
                family,
                TargetFamily::IosSimulator
                    | TargetFamily::WatchosSimulator
                    | TargetFamily::TvosSimulator
            );
            for target in family.targets() {
                assert_eq!(target.is_simulator(), simulator, "{target} in {family}");
            }
        }
    }
}
