//! Configuration management for assetgen projects
//!
//! - `types`: enums selecting the store provider and package manager
//! - `loader`: configuration file loading and parsing

pub mod loader;
pub mod types;


pub use loader::ProjectConfig;
pub use types::{PackageManager, StoreKind};
