//! The fixed icon size table.
use crate::types::IconSpec;

/// Every icon the generator writes, in output order.
pub const ICON_SIZES: [IconSpec; 4] = [
    IconSpec::new("pwa-192x192.png", 192, 192),
    IconSpec::new("pwa-512x512.png", 512, 512),
    IconSpec::new("apple-touch-icon.png", 180, 180),
    // Written through the generic encoder: one 32x32 image, not a multi-size ICO.
    IconSpec::new("favicon.ico", 32, 32),
];

/// Look up the table entry for an output filename.
pub fn icon_spec(filename: &str) -> Option<&'static IconSpec> {
    ICON_SIZES.iter().find(|spec| spec.filename == filename)
}
