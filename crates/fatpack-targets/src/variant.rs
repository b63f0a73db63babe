//! Build variant axis (debug/release), orthogonal to targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A build configuration axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildVariant {
    Debug,
    Release,
}

impl BuildVariant {
    /// Every variant, in declaration order.
    pub const ALL: [BuildVariant; 2] = [BuildVariant::Debug, BuildVariant::Release];

    /// Stable lowercase name, used in output paths and manifests.
    pub fn name(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildVariant {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildVariant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| TargetError::UnknownVariant { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for variant in BuildVariant::ALL {
            let parsed: BuildVariant = variant.name().parse().unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn unknown_variant_rejected() {
        assert!(matches!(
            "profile".parse::<BuildVariant>(),
            Err(TargetError::UnknownVariant { .. })
        ));
    }
}
