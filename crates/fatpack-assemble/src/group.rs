//! Variant filtering and per-family artifact grouping.

use std::collections::BTreeMap;

use fatpack_targets::{classify, BuildVariant, TargetFamily};

use crate::artifact::Artifact;
use crate::error::Result;

/// Artifacts of one target family, in canonical merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroup {
    pub family: TargetFamily,
    pub artifacts: Vec<Artifact>,
}

/// Partition artifacts matching `variant` into per-family groups.
///
/// Groups come back in canonical family enumeration order and only for
/// families with at least one contributing artifact. Within a group,
/// artifacts follow the family's canonical target ordering (stable for
/// repeated targets), not insertion order, so downstream merge output does
/// not depend on build scheduling order.
pub fn group(artifacts: &[Artifact], variant: BuildVariant) -> Result<Vec<FamilyGroup>> {
    let mut by_family: BTreeMap<TargetFamily, Vec<Artifact>> = BTreeMap::new();

    for artifact in artifacts.iter().filter(|a| a.variant == variant) {
        let family = classify(artifact.target)?;
        by_family.entry(family).or_default().push(artifact.clone());
    }

    // BTreeMap iteration follows the TargetFamily derive order, which is the
    // canonical enumeration order.
    Ok(by_family
        .into_iter()
        .map(|(family, mut artifacts)| {
            artifacts.sort_by_key(|a| family.canonical_index(a.target).unwrap_or(usize::MAX));
            FamilyGroup { family, artifacts }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatpack_targets::Target;

    fn artifact(target: Target, variant: BuildVariant, path: &str) -> Artifact {
        Artifact::new(target, variant, path)
    }

    #[test]
    fn partitions_variant_filtered_input() {
        let artifacts = vec![
            artifact(Target::MacosArm64, BuildVariant::Release, "a"),
            artifact(Target::IosArm64, BuildVariant::Release, "b"),
            artifact(Target::MacosX64, BuildVariant::Release, "c"),
            artifact(Target::MacosX64, BuildVariant::Debug, "d"),
        ];

        let groups = group(&artifacts, BuildVariant::Release).unwrap();
        assert_eq!(groups.len(), 2);

        // Every release artifact appears in exactly one group.
        let total: usize = groups.iter().map(|g| g.artifacts.len()).sum();
        assert_eq!(total, 3);
        for a in artifacts.iter().filter(|a| a.variant == BuildVariant::Release) {
            let containing: Vec<_> = groups
                .iter()
                .filter(|g| g.artifacts.contains(a))
                .collect();
            assert_eq!(containing.len(), 1, "{} in one group", a.target);
        }
    }

    #[test]
    fn groups_follow_canonical_family_order() {
        let artifacts = vec![
            artifact(Target::TvosArm64, BuildVariant::Release, "tv"),
            artifact(Target::MacosArm64, BuildVariant::Release, "mac"),
            artifact(Target::IosX64, BuildVariant::Release, "sim"),
        ];

        let groups = group(&artifacts, BuildVariant::Release).unwrap();
        let families: Vec<_> = groups.iter().map(|g| g.family).collect();
        assert_eq!(
            families,
            vec![
                TargetFamily::Macos,
                TargetFamily::IosSimulator,
                TargetFamily::TvosDevice,
            ]
        );
    }

    #[test]
    fn members_follow_canonical_target_order() {
        // Insertion order arm64 before x64; canonical order is x64 first.
        let artifacts = vec![
            artifact(Target::MacosArm64, BuildVariant::Release, "arm"),
            artifact(Target::MacosX64, BuildVariant::Release, "x64"),
        ];

        let groups = group(&artifacts, BuildVariant::Release).unwrap();
        assert_eq!(groups.len(), 1);
        let targets: Vec<_> = groups[0].artifacts.iter().map(|a| a.target).collect();
        assert_eq!(targets, vec![Target::MacosX64, Target::MacosArm64]);
    }

    #[test]
    fn empty_families_are_omitted() {
        let artifacts = vec![artifact(Target::IosArm64, BuildVariant::Release, "ios")];
        let groups = group(&artifacts, BuildVariant::Release).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].family, TargetFamily::IosDevice);
    }

    #[test]
    fn no_matching_variant_yields_no_groups() {
        let artifacts = vec![artifact(Target::IosArm64, BuildVariant::Debug, "ios")];
        let groups = group(&artifacts, BuildVariant::Release).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn unsupported_target_fails_classification() {
        let artifacts = vec![artifact(Target::LinuxX64, BuildVariant::Release, "so")];
        assert!(group(&artifacts, BuildVariant::Release).is_err());
    }
}
