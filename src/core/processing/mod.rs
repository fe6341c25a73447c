//! Pixel processing primitives.
pub mod resize;
