use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("JPEG quality must be between 1 and 100, got: {quality}")]
    InvalidQuality { quality: u8 },

    #[error("Caption band of {height}px cannot fit a line of text (needs at least {minimum}px)")]
    CaptionBandTooSmall { height: u32, minimum: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
