//! I/O layer: source-image discovery, gallery read-back for the compositor,
//! and JPEG output.
pub mod discover;
pub mod gallery;
pub mod writers;
