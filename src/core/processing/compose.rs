use image::{Rgb, RgbImage, imageops};
use tracing::debug;

use crate::core::params::ComposeParams;
use crate::core::processing::layout::GridLayout;
use crate::core::processing::text::{CaptionFont, wrap_caption};
use crate::error::{Error, Result};

/// One contact-sheet cell: a normalized image and its caption, paired
/// positionally by the caller.
#[derive(Debug)]
pub struct GalleryEntry {
    pub image: RgbImage,
    pub caption: String,
}

/// Left/top inset of caption text within its band, and the horizontal
/// shrink of the wrap width (applied on both sides).
pub const TEXT_MARGIN: u32 = 10;
/// Vertical advance between wrapped caption lines.
pub const LINE_ADVANCE: u32 = 20;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Lay out `entries` into a row-major grid, blit each image into its cell,
/// and draw its wrapped caption in the band beneath. All images must share
/// one size; lines that would leave the caption band are clipped.
pub fn compose_grid(
    entries: &[GalleryEntry],
    font: &CaptionFont,
    params: &ComposeParams,
) -> Result<RgbImage> {
    let layout = GridLayout::for_count(entries.len())?;

    let (cell_w, cell_h) = entries[0].image.dimensions();
    for (index, entry) in entries.iter().enumerate() {
        let (found_w, found_h) = entry.image.dimensions();
        if (found_w, found_h) != (cell_w, cell_h) {
            return Err(Error::MismatchedCell {
                index,
                expected_w: cell_w,
                expected_h: cell_h,
                found_w,
                found_h,
            });
        }
    }

    let full_cell_h = cell_h + params.caption_height;
    let canvas_w = layout.columns as u32 * cell_w;
    let canvas_h = layout.rows as u32 * full_cell_h;
    debug!(
        "Composing {} cells as {}x{} grid, canvas {}x{}",
        entries.len(),
        layout.columns,
        layout.rows,
        canvas_w,
        canvas_h
    );

    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, BACKGROUND);

    let wrap_width = cell_w.saturating_sub(2 * TEXT_MARGIN);
    let max_lines = (params.caption_height.saturating_sub(TEXT_MARGIN) / LINE_ADVANCE) as usize;

    for (index, entry) in entries.iter().enumerate() {
        let (x, y) = layout.cell_origin(index, i64::from(cell_w), i64::from(full_cell_h));
        imageops::replace(&mut canvas, &entry.image, x, y);

        let lines = wrap_caption(&entry.caption, wrap_width, font);
        if lines.len() > max_lines {
            debug!(
                "Caption {} clipped from {} to {} lines",
                index + 1,
                lines.len(),
                max_lines
            );
        }
        for (line_index, line) in lines.iter().take(max_lines).enumerate() {
            let text_x = x as i32 + TEXT_MARGIN as i32;
            let text_y =
                y as i32 + cell_h as i32 + (TEXT_MARGIN + line_index as u32 * LINE_ADVANCE) as i32;
            font.draw(&mut canvas, text_x, text_y, TEXT_COLOR, line);
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(side: u32, color: [u8; 3], caption: &str) -> GalleryEntry {
        GalleryEntry {
            image: RgbImage::from_pixel(side, side, Rgb(color)),
            caption: caption.to_string(),
        }
    }

    fn params() -> ComposeParams {
        ComposeParams::default()
    }

    #[test]
    fn four_cells_make_a_two_by_two_sheet() {
        let entries = vec![
            entry(64, [200, 0, 0], "one"),
            entry(64, [0, 200, 0], "two"),
            entry(64, [0, 0, 200], "three"),
            entry(64, [100, 100, 0], "four"),
        ];
        let sheet = compose_grid(&entries, &CaptionFont::bitmap(16.0), &params()).unwrap();
        assert_eq!(sheet.dimensions(), (128, 2 * (64 + 100)));
        // index 2 lands at origin (0, cell height + caption band)
        assert_eq!(sheet.get_pixel(0, 164), &Rgb([0, 0, 200]));
        assert_eq!(sheet.get_pixel(64, 0), &Rgb([0, 200, 0]));
        // background stays white between caption text and the next row
        assert_eq!(sheet.get_pixel(127, 160), &Rgb([255, 255, 255]));
    }

    #[test]
    fn captions_are_drawn_in_the_band() {
        let entries = vec![entry(64, [128, 128, 128], "hi")];
        let sheet = compose_grid(&entries, &CaptionFont::bitmap(16.0), &params()).unwrap();
        let mut found_text = false;
        for y in 64..64 + 40 {
            for x in 0..64 {
                if sheet.get_pixel(x, y) == &Rgb([0, 0, 0]) {
                    found_text = true;
                }
            }
        }
        assert!(found_text, "no caption pixels drawn in the band");
    }

    #[test]
    fn long_captions_stay_inside_the_band() {
        let caption = "word ".repeat(120);
        let entries = vec![entry(64, [128, 128, 128], caption.trim())];
        let sheet = compose_grid(&entries, &CaptionFont::bitmap(16.0), &params()).unwrap();
        assert_eq!(sheet.dimensions(), (64, 164));
        // the last 20 px of the band are beyond the clipped line grid for
        // caption_height 100 (lines start at 10, 30, 50, 70)
        for y in 64 + 90..164 {
            for x in 0..64 {
                assert_eq!(sheet.get_pixel(x, y), &Rgb([255, 255, 255]));
            }
        }
    }

    #[test]
    fn mismatched_cells_are_rejected() {
        let entries = vec![entry(64, [1, 2, 3], "a"), entry(32, [1, 2, 3], "b")];
        let err = compose_grid(&entries, &CaptionFont::bitmap(16.0), &params()).unwrap_err();
        assert!(matches!(err, Error::MismatchedCell { index: 1, .. }));
    }

    #[test]
    fn empty_entry_set_is_rejected() {
        let err = compose_grid(&[], &CaptionFont::bitmap(16.0), &params()).unwrap_err();
        assert!(matches!(err, Error::EmptyGallery));
    }
}
