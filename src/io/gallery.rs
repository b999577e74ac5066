use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::processing::compose::GalleryEntry;
use crate::error::{Error, Result};

/// Read the persisted gallery back from disk: every `image{N}.jpg` paired
/// with its sibling `image{N}.txt`, ordered by the numeric index `N`.
///
/// Ordering is numeric rather than lexicographic so `image10.jpg` follows
/// `image9.jpg` instead of landing between `image1.jpg` and `image2.jpg`.
/// A gallery image without its caption file is fatal.
pub fn load_gallery(dir: &Path) -> Result<Vec<GalleryEntry>> {
    let mut indexed: Vec<(usize, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Some(index) = parse_gallery_index(name) {
            indexed.push((index, path));
        }
    }

    if indexed.is_empty() {
        return Err(Error::EmptyGallery);
    }
    indexed.sort_by_key(|(index, _)| *index);

    let mut entries = Vec::with_capacity(indexed.len());
    for (_, jpeg_path) in indexed {
        let caption_path = jpeg_path.with_extension("txt");
        if !caption_path.is_file() {
            return Err(Error::MissingCaption { path: caption_path });
        }
        let caption = fs::read_to_string(&caption_path)?.trim().to_string();
        let image = image::open(&jpeg_path)?.to_rgb8();
        debug!("Loaded gallery cell {:?} ({} caption bytes)", jpeg_path, caption.len());
        entries.push(GalleryEntry { image, caption });
    }
    Ok(entries)
}

/// Parse `N` out of a persisted `image{N}.jpg` file name.
fn parse_gallery_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("image")?.strip_suffix(".jpg")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writers::jpeg::write_rgb_jpeg;

    fn write_cell(dir: &Path, index: usize, color: [u8; 3], caption: &str) {
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb(color));
        write_rgb_jpeg(&dir.join(format!("image{index}.jpg")), 8, 8, img.as_raw(), 95).unwrap();
        fs::write(dir.join(format!("image{index}.txt")), caption).unwrap();
    }

    #[test]
    fn parses_only_persisted_gallery_names() {
        assert_eq!(parse_gallery_index("image3.jpg"), Some(3));
        assert_eq!(parse_gallery_index("image12.jpg"), Some(12));
        assert_eq!(parse_gallery_index("image_grid.jpg"), None);
        assert_eq!(parse_gallery_index("image.jpg"), None);
        assert_eq!(parse_gallery_index("IMAGE3.jpg"), None);
        assert_eq!(parse_gallery_index("image3.png"), None);
    }

    #[test]
    fn entries_pair_by_numeric_index() {
        let dir = tempfile::tempdir().unwrap();
        for index in 1..=11 {
            write_cell(dir.path(), index, [index as u8, 0, 0], &format!("caption {index}"));
        }
        // A composite from an earlier run must not become a cell
        fs::write(dir.path().join("image_grid.jpg"), b"not a cell").unwrap();

        let entries = load_gallery(dir.path()).unwrap();
        assert_eq!(entries.len(), 11);
        assert_eq!(entries[1].caption, "caption 2");
        assert_eq!(entries[9].caption, "caption 10");
        assert_eq!(entries[10].caption, "caption 11");
    }

    #[test]
    fn captions_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        write_cell(dir.path(), 1, [9, 9, 9], "  spaced out \n");
        let entries = load_gallery(dir.path()).unwrap();
        assert_eq!(entries[0].caption, "spaced out");
    }

    #[test]
    fn missing_caption_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_cell(dir.path(), 1, [9, 9, 9], "ok");
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([1, 1, 1]));
        write_rgb_jpeg(&dir.path().join("image2.jpg"), 8, 8, img.as_raw(), 95).unwrap();

        let err = load_gallery(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingCaption { .. }));
    }

    #[test]
    fn empty_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_gallery(dir.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyGallery));
    }
}
