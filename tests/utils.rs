#![allow(dead_code)]

use assetgen::cli::Args;
use assetgen::config::ProjectConfig;
use assetgen::error::Result;
use assetgen::project::Project;
use assetgen::store::StoreProvider;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Quasar app and a template root side by side in a temporary directory.
///
/// Layout:
/// ```text
/// <tmp>/app/quasar.config.js
/// <tmp>/templates/app/<format>/<type><ext>
/// <tmp>/templates/app/<format>/pinia/store<ext>
/// <tmp>/templates/store/pinia/<format>/index<ext>
/// ```
pub struct Fixture {
    pub tmp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let fixture = Self { tmp };
        fs::create_dir_all(fixture.app()).unwrap();
        fs::write(fixture.app().join("quasar.config.js"), "module.exports = {}").unwrap();
        fixture.write_templates();
        fixture
    }

    pub fn app(&self) -> PathBuf {
        self.tmp.path().join("app")
    }

    pub fn templates(&self) -> PathBuf {
        self.tmp.path().join("templates")
    }

    pub fn project(&self) -> Project {
        Project::discover(self.app(), Some(self.templates())).unwrap()
    }

    /// Project built without discovery, with an explicit language default.
    pub fn project_with_typescript(&self, typescript: bool) -> Project {
        Project::new(
            self.app(),
            "quasar.config.js",
            ProjectConfig { typescript: Some(typescript), ..Default::default() },
            self.templates(),
        )
    }

    pub fn write_app_file(&self, relative: &str, content: &str) {
        write(&self.app().join(relative), content);
    }

    pub fn read_app_file(&self, relative: &str) -> String {
        fs::read_to_string(self.app().join(relative)).unwrap()
    }

    pub fn args(&self, asset_type: &str, names: &[&str], format: Option<&str>) -> Args {
        Args {
            asset_type: asset_type.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            format: format.map(str::to_string),
            project: Some(self.app()),
            templates: Some(self.templates()),
            verbose: 2,
            dry_run: false,
        }
    }

    fn write_templates(&self) {
        let app = self.templates().join("app");
        for format in ["default", "ts-options", "ts-class", "ts-composition", "ts-composition-setup"] {
            for kind in ["page", "layout", "component"] {
                write(&app.join(format).join(format!("{kind}.vue")), &format!("{kind} {format}"));
            }
        }
        for (format, ext) in [("default", ".js"), ("ts", ".ts")] {
            for kind in ["boot", "ssrmiddleware"] {
                write(&app.join(format).join(format!("{kind}{ext}")), &format!("{kind} {format}"));
            }
            write(&app.join(format).join("pinia").join(format!("store{ext}")), &format!("store {format}"));
            write(
                &self.templates().join("store/pinia").join(format).join(format!("index{ext}")),
                &format!("pinia bootstrap {format}"),
            );
        }
    }
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Store provider recording how often it was installed.
#[derive(Default)]
pub struct FakeProvider {
    pub installed: bool,
    pub install_calls: usize,
}

impl StoreProvider for FakeProvider {
    fn name(&self) -> &str {
        "pinia"
    }

    fn path_key(&self) -> &str {
        "stores"
    }

    fn is_installed(&self) -> bool {
        self.installed
    }

    fn install(&mut self) -> Result<()> {
        self.install_calls += 1;
        self.installed = true;
        Ok(())
    }
}
