//! `fatpack clean` — remove assembled bundles and intermediates.

use std::fs;
use std::path::Path;

use anyhow::Result;

use fatpack_assemble::layout;

use crate::manifest::FatpackManifest;

/// Remove the output root and its intermediate sibling.
pub fn run(project_dir: &Path, manifest: &FatpackManifest) -> Result<()> {
    let output_root = project_dir.join(&manifest.bundle.output_root);
    remove_dir(&output_root)?;
    remove_dir(&layout::intermediate_root(&output_root))?;
    Ok(())
}

fn remove_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
        println!("Removed {}", dir.display());
    } else {
        println!("Already clean: {} does not exist", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> FatpackManifest {
        FatpackManifest::from_str("[bundle]\nname = \"Kit\"\n").unwrap()
    }

    #[test]
    fn clean_removes_output_and_intermediates() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let intermediate = dir.path().join("out-intermediate");
        fs::create_dir_all(out.join("release")).unwrap();
        fs::create_dir_all(intermediate.join("release")).unwrap();
        fs::write(out.join("release").join("Kit.xcframework"), b"x").unwrap();

        run(dir.path(), &manifest()).unwrap();
        assert!(!out.exists());
        assert!(!intermediate.exists());
    }

    #[test]
    fn clean_handles_already_clean() {
        let dir = tempfile::tempdir().unwrap();
        // Nothing was ever assembled; cleaning is a no-op.
        run(dir.path(), &manifest()).unwrap();
    }

    #[test]
    fn clean_respects_manifest_output_root() {
        let dir = tempfile::tempdir().unwrap();
        let m = FatpackManifest::from_str(
            "[bundle]\nname = \"Kit\"\noutput-root = \"build/bundles\"\n",
        )
        .unwrap();
        let out = dir.path().join("build/bundles");
        fs::create_dir_all(&out).unwrap();

        run(dir.path(), &m).unwrap();
        assert!(!out.exists());
    }
}
