//! `fatpack targets` — inspect the supported target set.

use anyhow::Result;

use fatpack_targets::{classify, Target, TargetFamily};

/// List supported targets grouped by family.
pub fn list() -> Result<()> {
    println!("Bundleable targets by family:");
    for family in TargetFamily::ALL {
        println!("  {family}:");
        for target in family.targets() {
            println!("    {target}");
        }
    }

    println!();
    println!("Recognized but not bundleable (non-Apple):");
    for target in Target::ALL.iter().filter(|t| !t.is_apple()) {
        println!("  {target}");
    }

    Ok(())
}

/// Show details of one target.
pub fn describe(name: &str) -> Result<()> {
    let target: Target = name.parse()?;

    println!("Target:    {target}");
    println!("OS family: {}", target.os_family());
    println!("Arch:      {}", target.arch());
    match classify(target) {
        Ok(family) => {
            println!("Family:    {family}");
            println!(
                "Kind:      {}",
                if target.is_simulator() {
                    "simulator"
                } else {
                    "device"
                }
            );
        }
        Err(_) => {
            println!("Family:    (not bundleable: non-Apple target)");
        }
    }

    Ok(())
}
