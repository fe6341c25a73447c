pub mod icon;
pub mod manifest;

pub use icon::write_icon;
pub use manifest::{MANIFEST_FILENAME, ManifestIcon, write_manifest};
