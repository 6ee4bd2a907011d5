use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::{PackageManager, StoreKind};
use crate::constants::PACKAGE_MANIFEST;
use crate::error::{Error, Result};
use crate::ioutils::read_to_string;
use crate::project::Project;

/// The state-management library a project's stores are built on.
pub trait StoreProvider {
    /// Provider name, also the template sub-directory holding its templates.
    fn name(&self) -> &str;

    /// Folder under `src/` holding the store.
    fn path_key(&self) -> &str;

    /// Whether the provider package is already a project dependency.
    fn is_installed(&self) -> bool;

    /// Adds the provider package to the project, blocking until done.
    fn install(&mut self) -> Result<()>;

    /// Whether store modules are generated as whole directories.
    fn modules_are_directories(&self) -> bool {
        false
    }
}

/// Provider detected from the project's `package.json`, installed through its package manager.
#[derive(Debug)]
pub struct PackageStoreProvider {
    kind: StoreKind,
    package_manager: PackageManager,
    project_root: PathBuf,
    installed: bool,
}

impl PackageStoreProvider {
    pub fn from_project(project: &Project) -> Result<Self> {
        let dependencies = read_dependencies(project.root())?;
        let config = project.config();

        let kind = config.store.unwrap_or_else(|| {
            if dependencies.contains(StoreKind::Vuex.package()) {
                StoreKind::Vuex
            } else {
                StoreKind::Pinia
            }
        });
        let package_manager = config
            .package_manager
            .unwrap_or_else(|| detect_package_manager(project.root()));
        let installed = dependencies.contains(kind.package());

        log::debug!(
            "Store provider '{kind}' (installed: {installed}, package manager: {})",
            package_manager.program()
        );
        Ok(Self { kind, package_manager, project_root: project.root().to_path_buf(), installed })
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    fn install_spec(&self) -> &'static str {
        match self.kind {
            StoreKind::Pinia => "pinia",
            StoreKind::Vuex => "vuex@^4",
        }
    }
}

impl StoreProvider for PackageStoreProvider {
    fn name(&self) -> &str {
        self.kind.package()
    }

    fn path_key(&self) -> &str {
        self.kind.path_key()
    }

    fn is_installed(&self) -> bool {
        self.installed
    }

    fn install(&mut self) -> Result<()> {
        let program = self.package_manager.program();
        let spec = self.install_spec();
        log::info!("Installing {spec} with {program}...");

        let status = Command::new(program)
            .arg(self.package_manager.add_command())
            .arg(spec)
            .current_dir(&self.project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::InstallFailed { package: spec.to_string(), status });
        }
        self.installed = true;
        Ok(())
    }

    fn modules_are_directories(&self) -> bool {
        self.kind == StoreKind::Vuex
    }
}

/// Names listed under `dependencies` and `devDependencies`.
fn read_dependencies(project_root: &Path) -> Result<HashSet<String>> {
    let manifest = project_root.join(PACKAGE_MANIFEST);
    if !manifest.is_file() {
        return Ok(HashSet::new());
    }

    let manifest: serde_json::Value = serde_json::from_str(&read_to_string(manifest)?)?;
    let names = ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section).and_then(|deps| deps.as_object()))
        .flat_map(|deps| deps.keys().cloned())
        .collect();
    Ok(names)
}

fn detect_package_manager(project_root: &Path) -> PackageManager {
    [PackageManager::Yarn, PackageManager::Pnpm, PackageManager::Bun]
        .into_iter()
        .find(|pm| project_root.join(pm.lock_file()).is_file())
        .unwrap_or(PackageManager::Npm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use std::fs;
    use tempfile::TempDir;

    fn project_with(package_json: Option<&str>, config: ProjectConfig) -> (TempDir, Project) {
        let root = TempDir::new().unwrap();
        if let Some(package_json) = package_json {
            fs::write(root.path().join(PACKAGE_MANIFEST), package_json).unwrap();
        }
        let project = Project::new(
            root.path().to_path_buf(),
            "quasar.config.js",
            config,
            root.path().join("templates"),
        );
        (root, project)
    }

    #[test]
    fn defaults_to_pinia_when_nothing_is_listed() {
        let (_root, project) = project_with(None, ProjectConfig::default());
        let provider = PackageStoreProvider::from_project(&project).unwrap();

        assert_eq!(provider.kind(), StoreKind::Pinia);
        assert_eq!(provider.path_key(), "stores");
        assert!(!provider.is_installed());
        assert!(!provider.modules_are_directories());
        assert_eq!(provider.package_manager(), PackageManager::Npm);
    }

    #[test]
    fn vuex_dependency_selects_vuex() {
        let (_root, project) = project_with(
            Some(r#"{"dependencies": {"vue": "^3", "vuex": "^4.0.0"}}"#),
            ProjectConfig::default(),
        );
        let provider = PackageStoreProvider::from_project(&project).unwrap();

        assert_eq!(provider.name(), "vuex");
        assert_eq!(provider.path_key(), "store");
        assert!(provider.is_installed());
        assert!(provider.modules_are_directories());
    }

    #[test]
    fn dev_dependencies_count_as_installed() {
        let (_root, project) = project_with(
            Some(r#"{"devDependencies": {"pinia": "^2"}}"#),
            ProjectConfig::default(),
        );
        let provider = PackageStoreProvider::from_project(&project).unwrap();
        assert!(provider.is_installed());
    }

    #[test]
    fn config_overrides_detection() {
        let config = ProjectConfig {
            store: Some(StoreKind::Pinia),
            package_manager: Some(PackageManager::Bun),
            ..Default::default()
        };
        let (_root, project) =
            project_with(Some(r#"{"dependencies": {"vuex": "^4"}}"#), config);
        let provider = PackageStoreProvider::from_project(&project).unwrap();

        assert_eq!(provider.kind(), StoreKind::Pinia);
        assert!(!provider.is_installed());
        assert_eq!(provider.package_manager(), PackageManager::Bun);
    }

    #[test]
    fn lock_file_selects_package_manager() {
        let (root, project) = project_with(Some("{}"), ProjectConfig::default());
        fs::write(root.path().join("pnpm-lock.yaml"), "").unwrap();

        let provider = PackageStoreProvider::from_project(&project).unwrap();
        assert_eq!(provider.package_manager(), PackageManager::Pnpm);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let (_root, project) = project_with(Some("{not json"), ProjectConfig::default());
        assert!(matches!(
            PackageStoreProvider::from_project(&project),
            Err(Error::JSONParseError(_))
        ));
    }
}
