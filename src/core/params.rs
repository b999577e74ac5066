use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Normalization parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// If false, sources pass through at their original size (alpha still flattened)
    pub rescale: bool,
    /// Output side length for inputs that are already square
    pub square_size: u32,
    /// Output side length for cropped or undersized inputs
    pub general_size: u32,
    /// JPEG quality (1-100) for persisted normalized images
    pub quality: u8,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            rescale: true,
            square_size: 768,
            general_size: 512,
            quality: 90,
        }
    }
}

/// Contact-sheet composition parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeParams {
    /// Height in pixels of the caption band under each grid cell
    pub caption_height: u32,
    /// Caption font size in pixels
    pub font_size: f32,
    /// Preferred caption font file; None means system fonts, then built-in fallback
    pub font_path: Option<PathBuf>,
    /// JPEG quality (1-100) for the composite
    pub quality: u8,
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self {
            caption_height: 100,
            font_size: 16.0,
            font_path: None,
            quality: 90,
        }
    }
}
