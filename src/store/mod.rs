//! State-management provider support for the `store` asset type
//!
//! - `provider`: the provider seam and its `package.json` backed implementation
//! - `gate`: installs the provider and bootstraps its folder before generation

pub mod gate;
pub mod provider;

pub use gate::ensure_store_ready;
pub use provider::{PackageStoreProvider, StoreProvider};

use crate::constants::folders;

/// Project-relative folder holding the store for `path_key`.
pub fn store_folder(path_key: &str) -> String {
    format!("{}/{path_key}", folders::SRC)
}
