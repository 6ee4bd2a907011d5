use crate::asset::kind::{AssetType, TemplateFormat};
use crate::constants::{folders, ROUTER_ENTRY_STEM, VUE_EXTENSION};
use crate::error::{Error, Result};
use crate::extension::{detect_extension, ScriptExtension};
use crate::project::Project;
use crate::store::{store_folder, StoreProvider};

/// Where and how an asset type is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Destination folder relative to the project root.
    pub folder: String,
    /// Extension every generated name must end with, `None` for directory templates.
    pub extension: Option<String>,
    /// Where the new asset has to be wired in by hand.
    pub reference: Option<String>,
    /// Whether the store provider must be ready before generating.
    pub requires_install: bool,
}

impl AssetDescriptor {
    /// Looks up the descriptor of `asset_type` for this project.
    ///
    /// Reference hints point at the router and store entry files with the
    /// extension those files actually have on disk. Only stores consult the
    /// provider, and fail with `StoreProviderRequired` without one.
    pub fn resolve(
        asset_type: AssetType,
        format: TemplateFormat,
        project: &Project,
        provider: Option<&dyn StoreProvider>,
    ) -> Result<Self> {
        let script = if format.is_typescript() { ScriptExtension::Ts } else { ScriptExtension::Js };
        let router_reference = || {
            format!("{ROUTER_ENTRY_STEM}{}", detect_extension(ROUTER_ENTRY_STEM, project.root()))
        };

        let descriptor = match asset_type {
            AssetType::Page => Self::markup(folders::PAGES, Some(router_reference())),
            AssetType::Layout => Self::markup(folders::LAYOUTS, Some(router_reference())),
            AssetType::Component => Self::markup(folders::COMPONENTS, None),
            AssetType::Store => {
                let provider = provider.ok_or(Error::StoreProviderRequired)?;
                let folder = store_folder(provider.path_key());
                let index = format!("{folder}/index");
                let extension = if provider.modules_are_directories() {
                    None
                } else {
                    Some(script.to_string())
                };
                Self {
                    reference: Some(format!(
                        "{index}{}",
                        detect_extension(&index, project.root())
                    )),
                    folder,
                    extension,
                    requires_install: true,
                }
            }
            AssetType::Boot => Self::script(
                folders::BOOT,
                script,
                format!("{} > boot", project.config_file()),
            ),
            AssetType::SsrMiddleware => Self::script(
                folders::SSR_MIDDLEWARES,
                script,
                format!("{} > ssr > middlewares", project.config_file()),
            ),
        };
        Ok(descriptor)
    }

    fn markup(folder: &str, reference: Option<String>) -> Self {
        Self {
            folder: folder.to_string(),
            extension: Some(VUE_EXTENSION.to_string()),
            reference,
            requires_install: false,
        }
    }

    fn script(folder: &str, extension: ScriptExtension, reference: String) -> Self {
        Self {
            folder: folder.to_string(),
            extension: Some(extension.to_string()),
            reference: Some(reference),
            requires_install: false,
        }
    }
}
