//! The closed set of supported compile targets.
//!
//! Targets are identified by stable kebab-case names (`macos-arm64`,
//! `ios-simulator-arm64`, ...) used in manifests and on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// One compiled architecture/OS combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    MacosX64,
    MacosArm64,
    IosArm32,
    IosArm64,
    IosX64,
    IosSimulatorArm64,
    WatchosArm32,
    WatchosArm64,
    WatchosX64,
    WatchosSimulatorArm64,
    TvosArm64,
    TvosX64,
    TvosSimulatorArm64,
    LinuxX64,
    LinuxArm64,
    MingwX64,
    AndroidArm64,
    AndroidX64,
}

/// Operating system family of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsFamily {
    Macos,
    Ios,
    Watchos,
    Tvos,
    Linux,
    Windows,
    Android,
}

impl OsFamily {
    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            OsFamily::Macos => "macos",
            OsFamily::Ios => "ios",
            OsFamily::Watchos => "watchos",
            OsFamily::Tvos => "tvos",
            OsFamily::Linux => "linux",
            OsFamily::Windows => "windows",
            OsFamily::Android => "android",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Target {
    /// Every supported target, in declaration order.
    pub const ALL: [Target; 18] = [
        Target::MacosX64,
        Target::MacosArm64,
        Target::IosArm32,
        Target::IosArm64,
        Target::IosX64,
        Target::IosSimulatorArm64,
        Target::WatchosArm32,
        Target::WatchosArm64,
        Target::WatchosX64,
        Target::WatchosSimulatorArm64,
        Target::TvosArm64,
        Target::TvosX64,
        Target::TvosSimulatorArm64,
        Target::LinuxX64,
        Target::LinuxArm64,
        Target::MingwX64,
        Target::AndroidArm64,
        Target::AndroidX64,
    ];

    /// Stable kebab-case name used in manifests and CLI arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Target::MacosX64 => "macos-x64",
            Target::MacosArm64 => "macos-arm64",
            Target::IosArm32 => "ios-arm32",
            Target::IosArm64 => "ios-arm64",
            Target::IosX64 => "ios-x64",
            Target::IosSimulatorArm64 => "ios-simulator-arm64",
            Target::WatchosArm32 => "watchos-arm32",
            Target::WatchosArm64 => "watchos-arm64",
            Target::WatchosX64 => "watchos-x64",
            Target::WatchosSimulatorArm64 => "watchos-simulator-arm64",
            Target::TvosArm64 => "tvos-arm64",
            Target::TvosX64 => "tvos-x64",
            Target::TvosSimulatorArm64 => "tvos-simulator-arm64",
            Target::LinuxX64 => "linux-x64",
            Target::LinuxArm64 => "linux-arm64",
            Target::MingwX64 => "mingw-x64",
            Target::AndroidArm64 => "android-arm64",
            Target::AndroidX64 => "android-x64",
        }
    }

    /// The operating system family this target compiles for.
    pub fn os_family(&self) -> OsFamily {
        match self {
            Target::MacosX64 | Target::MacosArm64 => OsFamily::Macos,
            Target::IosArm32 | Target::IosArm64 | Target::IosX64 | Target::IosSimulatorArm64 => {
                OsFamily::Ios
            }
            Target::WatchosArm32
            | Target::WatchosArm64
            | Target::WatchosX64
            | Target::WatchosSimulatorArm64 => OsFamily::Watchos,
            Target::TvosArm64 | Target::TvosX64 | Target::TvosSimulatorArm64 => OsFamily::Tvos,
            Target::LinuxX64 | Target::LinuxArm64 => OsFamily::Linux,
            Target::MingwX64 => OsFamily::Windows,
            Target::AndroidArm64 | Target::AndroidX64 => OsFamily::Android,
        }
    }

    /// Whether this target produces Apple-family binary formats.
    pub fn is_apple(&self) -> bool {
        matches!(
            self.os_family(),
            OsFamily::Macos | OsFamily::Ios | OsFamily::Watchos | OsFamily::Tvos
        )
    }

    /// CPU architecture name.
    pub fn arch(&self) -> &'static str {
        match self {
            Target::MacosX64
            | Target::IosX64
            | Target::WatchosX64
            | Target::TvosX64
            | Target::LinuxX64
            | Target::MingwX64
            | Target::AndroidX64 => "x86_64",
            Target::IosArm32 | Target::WatchosArm32 => "arm32",
            Target::MacosArm64
            | Target::IosArm64
            | Target::IosSimulatorArm64
            | Target::WatchosArm64
            | Target::WatchosSimulatorArm64
            | Target::TvosArm64
            | Target::TvosSimulatorArm64
            | Target::LinuxArm64
            | Target::AndroidArm64 => "arm64",
        }
    }

    /// Whether this target runs in a simulator rather than on device.
    pub fn is_simulator(&self) -> bool {
        matches!(
            self,
            Target::IosX64
                | Target::IosSimulatorArm64
                | Target::WatchosX64
                | Target::WatchosSimulatorArm64
                | Target::TvosX64
                | Target::TvosSimulatorArm64
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| TargetError::UnknownTarget { name: s.to_string() })
    }
}
