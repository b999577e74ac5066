//! Caption font handling and word wrap.
//!
//! A caption font is either a vector font loaded from disk (rendered through
//! `imageproc`) or the built-in 8x8 bitmap glyphs, integer-scaled. Font
//! loading never fails: a missing preferred font degrades to system fonts and
//! finally to the bitmap fallback, so a bad font path cannot abort a run.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::{debug, warn};

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub enum CaptionFont {
    Vector { font: FontVec, scale: PxScale },
    Bitmap { factor: u32 },
}

impl CaptionFont {
    /// Load the preferred font, else the first usable system font, else the
    /// built-in bitmap font. Fallbacks are logged, never surfaced as errors.
    pub fn load(preferred: Option<&Path>, size: f32) -> CaptionFont {
        if let Some(path) = preferred {
            match Self::from_file(path, size) {
                Some(font) => return font,
                None => warn!("Could not load caption font {:?}, trying system fonts", path),
            }
        }
        for candidate in FONT_CANDIDATES {
            if let Some(font) = Self::from_file(Path::new(candidate), size) {
                debug!("Caption font: {}", candidate);
                return font;
            }
        }
        warn!("No vector font available, using the built-in bitmap font");
        Self::bitmap(size)
    }

    fn from_file(path: &Path, size: f32) -> Option<CaptionFont> {
        let data = std::fs::read(path).ok()?;
        let font = FontVec::try_from_vec(data).ok()?;
        Some(CaptionFont::Vector {
            font,
            scale: PxScale::from(size),
        })
    }

    /// The built-in bitmap font at the closest integer multiple of its 8 px
    /// glyph grid.
    pub fn bitmap(size: f32) -> CaptionFont {
        let factor = ((size / 8.0).round() as u32).max(1);
        CaptionFont::Bitmap { factor }
    }

    /// Horizontal extent of `text` in pixels.
    pub fn measure(&self, text: &str) -> u32 {
        match self {
            CaptionFont::Vector { font, scale } => text_size(*scale, font, text).0,
            CaptionFont::Bitmap { factor } => text.chars().count() as u32 * 8 * factor,
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        match self {
            CaptionFont::Vector { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            CaptionFont::Bitmap { factor } => {
                draw_bitmap_text(canvas, x, y, *factor, color, text);
            }
        }
    }
}

fn draw_bitmap_text(canvas: &mut RgbImage, x: i32, y: i32, factor: u32, color: Rgb<u8>, text: &str) {
    let (width, height) = canvas.dimensions();
    for (char_index, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or_default();
        let origin_x = x + (char_index as u32 * 8 * factor) as i32;
        for (row_index, row) in glyph.iter().enumerate() {
            for bit in 0..8u32 {
                if row >> bit & 1 == 0 {
                    continue;
                }
                for dy in 0..factor {
                    for dx in 0..factor {
                        let px = origin_x + (bit * factor + dx) as i32;
                        let py = y + (row_index as u32 * factor + dy) as i32;
                        if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                            canvas.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

/// Greedily pack words into lines no wider than `max_width` pixels. A word
/// that alone exceeds the limit takes a line of its own, so wrapping always
/// makes progress.
pub fn wrap_caption(text: &str, max_width: u32, font: &CaptionFont) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if line.is_empty() || font.measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // factor 2: every glyph cell is 16 px wide
    fn font() -> CaptionFont {
        CaptionFont::bitmap(16.0)
    }

    #[test]
    fn bitmap_measure_is_per_char() {
        assert_eq!(font().measure("abcd"), 4 * 16);
        assert_eq!(font().measure(""), 0);
    }

    #[test]
    fn wrap_splits_when_line_exceeds_width() {
        let lines = wrap_caption("aaaa bbbb cccc", 160, &font());
        assert_eq!(lines, vec!["aaaa bbbb".to_string(), "cccc".to_string()]);
        for line in &lines {
            assert!(font().measure(line) <= 160);
        }
    }

    #[test]
    fn wrap_produces_multiple_bounded_lines() {
        let lines = wrap_caption("one two three four five six seven", 112, &font());
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(font().measure(line) <= 112, "line {:?} too wide", line);
        }
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap_caption("abcdefghijklmnop xy", 160, &font());
        assert_eq!(lines, vec!["abcdefghijklmnop".to_string(), "xy".to_string()]);
    }

    #[test]
    fn blank_caption_wraps_to_nothing() {
        assert!(wrap_caption("   ", 160, &font()).is_empty());
    }

    #[test]
    fn bitmap_draw_marks_pixels() {
        let mut canvas = RgbImage::from_pixel(64, 32, Rgb([255, 255, 255]));
        font().draw(&mut canvas, 0, 0, Rgb([0, 0, 0]), "H");
        assert!(canvas.pixels().any(|p| p == &Rgb([0, 0, 0])));
    }
}
