//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, resize, and captioning-transport errors, and
//! provides semantic variants for the guarded gallery edge cases.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("JPEG encoding error: {0}")]
    JpegEncoding(#[from] jpeg_encoder::EncodingError),

    #[error("Captioning request failed: {0}")]
    CaptionRequest(#[from] reqwest::Error),

    #[error("Captioning response unusable: {0}")]
    CaptionResponse(String),

    #[error("No source images found in: {dir}")]
    NoInput { dir: PathBuf },

    #[error("Cannot lay out an empty image set")]
    EmptyGallery,

    #[error("Missing caption file: {path}")]
    MissingCaption { path: PathBuf },

    #[error(
        "Grid cell {index} is {found_w}x{found_h}, expected {expected_w}x{expected_h}; all gallery images must share one size"
    )]
    MismatchedCell {
        index: usize,
        expected_w: u32,
        expected_h: u32,
        found_w: u32,
        found_h: u32,
    },

    #[error("Image dimensions {width}x{height} exceed the JPEG encoder limit")]
    OversizedImage { width: u32, height: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}
