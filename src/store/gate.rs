use crate::asset::TemplateFormat;
use crate::constants::{DRY_RUN_PREFIX, STORE_TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::copy_dir_all;
use crate::project::Project;
use crate::store::{store_folder, StoreProvider};

/// Prepares the project for store generation.
///
/// Installs the provider when it is missing, then seeds the store folder from
/// `<templates>/store/<provider>/<format>` if the folder does not exist yet.
/// Must complete before any store module is generated.
///
/// # Errors
/// Only a failed install is returned. A failed bootstrap copy is logged and the
/// run carries on.
pub fn ensure_store_ready(
    provider: &mut dyn StoreProvider,
    project: &Project,
    format: TemplateFormat,
    dry_run: bool,
) -> Result<()> {
    let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };

    if !provider.is_installed() {
        if dry_run {
            log::info!("{prefix}Installing {}", provider.name());
        } else {
            provider.install()?;
        }
    }

    let folder = project.resolve(store_folder(provider.path_key()));
    if folder.exists() {
        log::debug!("Store folder '{}' already exists", folder.display());
        return Ok(());
    }

    let relative = folder.display_relative_to(project.root());
    let bootstrap = project
        .templates_root()
        .join(STORE_TEMPLATES_DIR)
        .join(provider.name())
        .join(format.as_str());

    if !bootstrap.is_dir() {
        let e = Error::TemplateNotFound { path: bootstrap.display().to_string() };
        log::error!("Failed to generate {relative}: {e}");
        return Ok(());
    }

    if dry_run {
        log::info!("{prefix}Generated {relative}");
        return Ok(());
    }

    match copy_dir_all(&bootstrap, &folder) {
        Ok(()) => log::info!("Generated {relative}"),
        Err(e) => log::error!("Failed to generate {relative}: {e}"),
    }
    Ok(())
}
