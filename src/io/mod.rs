//! I/O layer: decoding the source image (`loader`) and `writers` for icon
//! files and the JSON manifest sidecar.
pub mod loader;
pub use loader::load_rgba;

pub mod writers;
