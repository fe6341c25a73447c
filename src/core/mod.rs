//! Core building blocks: the fixed size table, generator parameters, and
//! the resize primitive. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
pub mod sizes;
