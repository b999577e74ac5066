//! Core processing building blocks: square normalization, grid layout,
//! caption wrapping/rendering, and grid composition. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
