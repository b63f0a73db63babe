//! `fatpack init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::FatpackManifest;

/// Create a new fatpack project at the given path.
///
/// `name` is the bundle name. The directory `name` is created relative to cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.join("fatpack.toml").exists() {
        bail!(
            "'{}' already contains a fatpack.toml",
            project_dir.display()
        );
    }

    fs::create_dir_all(project_dir)
        .with_context(|| format!("creating {}", project_dir.display()))?;
    fs::create_dir_all(project_dir.join("out")).context("creating out/ directory")?;

    let manifest_content = FatpackManifest::template(name);
    fs::write(project_dir.join("fatpack.toml"), &manifest_content)
        .context("writing fatpack.toml")?;

    fs::write(project_dir.join(".gitignore"), "out/\nout-intermediate/\n")
        .context("writing .gitignore")?;

    println!("Created project '{name}'");
    println!("  {name}/fatpack.toml");
    println!("  {name}/out/");
    println!("  {name}/.gitignore");
    println!();
    println!("Register your per-target binaries under [artifacts.<variant>],");
    println!("then run `fatpack assemble`.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_project_structure() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("SharedKit");

        create_project(&project_path, "SharedKit").unwrap();

        assert!(project_path.join("fatpack.toml").is_file());
        assert!(project_path.join("out").is_dir());
        assert!(project_path.join(".gitignore").is_file());
    }

    #[test]
    fn init_generates_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("SharedKit");

        create_project(&project_path, "SharedKit").unwrap();

        let content = fs::read_to_string(project_path.join("fatpack.toml")).unwrap();
        let manifest = FatpackManifest::from_str(&content).unwrap();
        assert_eq!(manifest.bundle.name, "SharedKit");
    }

    #[test]
    fn init_refuses_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fatpack.toml"), "[bundle]\nname = \"x\"\n").unwrap();

        let result = create_project(dir.path(), "x");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("already contains"));
    }
}
