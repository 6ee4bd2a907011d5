//! Resolution of what to generate and where
//!
//! - `kind`: asset types, template formats and the format collapse rule
//! - `request`: validation of raw command-line values
//! - `descriptor`: destination folder, extension and reference hint per type
//! - `mapper`: template and destination paths per requested name

pub mod descriptor;
pub mod kind;
pub mod mapper;
pub mod request;

pub use descriptor::AssetDescriptor;
pub use kind::{AssetType, TemplateFormat};
pub use mapper::{map_name, normalize_name, AssetMapping};
pub use request::ResolvedRequest;
