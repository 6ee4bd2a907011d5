//! Basic enums for project configuration

use serde::Deserialize;
use std::fmt::Display;

/// State-management library backing the `store` asset type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Pinia,
    Vuex,
}

impl StoreKind {
    /// npm package providing the library.
    pub fn package(&self) -> &'static str {
        match self {
            StoreKind::Pinia => "pinia",
            StoreKind::Vuex => "vuex",
        }
    }

    /// Folder under `src/` holding the store.
    pub fn path_key(&self) -> &'static str {
        match self {
            StoreKind::Pinia => "stores",
            StoreKind::Vuex => "store",
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.package())
    }
}

/// Package manager used to install a missing store provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Sub-command adding a dependency to the project.
    pub fn add_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "add",
        }
    }

    /// Lock file written by this package manager.
    pub fn lock_file(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Bun => "bun.lockb",
        }
    }
}
