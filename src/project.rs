//! Project context: root discovery, language default and template location.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::constants::{PROJECT_MARKERS, TEMPLATES_DIR, TSCONFIG_FILE};
use crate::error::{Error, Result};

/// The Quasar app assets are generated into.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    config_file: String,
    typescript: bool,
    templates_root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Finds the project enclosing `start` and loads its configuration.
    ///
    /// # Arguments
    /// * `start` - Directory the upward search begins in
    /// * `templates_override` - Template root given on the command line
    pub fn discover<P: AsRef<Path>>(
        start: P,
        templates_override: Option<PathBuf>,
    ) -> Result<Self> {
        let (root, config_file) = find_root(start.as_ref())?;
        let config = ProjectConfig::load(&root)?;
        let templates_root = match templates_override {
            Some(templates) => templates,
            None => match &config.templates {
                Some(templates) => root.join(templates),
                None => installation_templates_dir()?,
            },
        };
        Ok(Self::new(root, config_file, config, templates_root))
    }

    pub fn new(
        root: PathBuf,
        config_file: impl Into<String>,
        config: ProjectConfig,
        templates_root: PathBuf,
    ) -> Self {
        let typescript =
            config.typescript.unwrap_or_else(|| root.join(TSCONFIG_FILE).is_file());
        log::debug!(
            "Project root '{}' (typescript: {typescript}, templates: '{}')",
            root.display(),
            templates_root.display()
        );
        Self { root, config_file: config_file.into(), typescript, templates_root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name of the Quasar config file that marked the root.
    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Whether output defaults to TypeScript.
    pub fn is_typescript(&self) -> bool {
        self.typescript
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Resolves a project-relative path.
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }
}

/// Walks up from `start` to the first directory holding a Quasar config file.
fn find_root(start: &Path) -> Result<(PathBuf, String)> {
    let not_found = || Error::ProjectNotFound { start: start.display().to_string() };
    let start = start.canonicalize().map_err(|_| not_found())?;

    for dir in start.ancestors() {
        if let Some(marker) = PROJECT_MARKERS.iter().find(|m| dir.join(m).is_file()) {
            return Ok((dir.to_path_buf(), marker.to_string()));
        }
    }
    Err(not_found())
}

/// `templates/` next to the running executable.
fn installation_templates_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let install_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(install_dir.join(TEMPLATES_DIR))
}
