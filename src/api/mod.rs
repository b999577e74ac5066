//! High-level, ergonomic library API: caption a directory of images, compose
//! the contact sheet, or run both stages in sequence. Prefer these
//! entrypoints over low-level processing modules when embedding the crate.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::caption::Captioner;
use crate::core::params::{ComposeParams, NormalizeParams};
use crate::core::processing::compose::compose_grid;
use crate::core::processing::normalize::normalize;
use crate::core::processing::text::CaptionFont;
use crate::error::{Error, Result};
use crate::io::discover::list_source_images;
use crate::io::gallery::load_gallery;
use crate::io::writers::jpeg::write_rgb_jpeg;

/// Captioning-stage report
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryReport {
    pub processed: usize,
    pub skipped: usize,
}

/// Normalize every source image of `input_dir` into `output_dir` and persist
/// one caption per image.
///
/// Sources are enumerated in sorted order and assigned 1-based indices; each
/// becomes `image{N}.jpg` plus `image{N}.txt`. Work is fully sequential and
/// the first failure aborts the batch: there is no per-file isolation, retry,
/// or partial-result reporting.
pub fn caption_directory(
    input_dir: &Path,
    output_dir: &Path,
    captioner: &dyn Captioner,
    params: &NormalizeParams,
) -> Result<GalleryReport> {
    fs::create_dir_all(output_dir)?;

    let listing = list_source_images(input_dir)?;
    if listing.images.is_empty() {
        return Err(Error::NoInput {
            dir: input_dir.to_path_buf(),
        });
    }

    let mut report = GalleryReport {
        skipped: listing.skipped,
        ..Default::default()
    };

    for (position, source) in listing.images.iter().enumerate() {
        let index = position + 1;
        info!("Processing {:?} -> image{}.jpg", source, index);

        let decoded = image::open(source)?;
        let normalized = normalize(decoded, params)?;

        let jpeg_path = output_dir.join(format!("image{index}.jpg"));
        write_rgb_jpeg(
            &jpeg_path,
            normalized.width(),
            normalized.height(),
            normalized.as_raw(),
            params.quality,
        )?;

        // The service must see exactly the persisted bytes
        let jpeg_bytes = fs::read(&jpeg_path)?;
        let caption = captioner.caption_jpeg(&jpeg_bytes)?;
        fs::write(output_dir.join(format!("image{index}.txt")), caption.trim())?;

        report.processed += 1;
    }

    Ok(report)
}

/// Compose the contact sheet from a gallery directory previously produced by
/// [`caption_directory`], writing the composite JPEG to `grid_path`
/// (overwriting any existing file).
pub fn compose_contact_sheet(
    gallery_dir: &Path,
    grid_path: &Path,
    params: &ComposeParams,
) -> Result<()> {
    let entries = load_gallery(gallery_dir)?;
    info!("Composing contact sheet from {} cells", entries.len());

    let font = CaptionFont::load(params.font_path.as_deref(), params.font_size);
    let composite = compose_grid(&entries, &font, params)?;

    write_rgb_jpeg(
        grid_path,
        composite.width(),
        composite.height(),
        composite.as_raw(),
        params.quality,
    )?;
    info!("Contact sheet written to {:?}", grid_path);
    Ok(())
}

/// Run the full pipeline: caption `input_dir` into `output_dir`, then compose
/// the contact sheet at `grid_path` from what was persisted.
pub fn run_gallery(
    input_dir: &Path,
    output_dir: &Path,
    grid_path: &Path,
    captioner: &dyn Captioner,
    normalize_params: &NormalizeParams,
    compose_params: &ComposeParams,
) -> Result<GalleryReport> {
    let report = caption_directory(input_dir, output_dir, captioner, normalize_params)?;
    compose_contact_sheet(output_dir, grid_path, compose_params)?;
    Ok(report)
}
