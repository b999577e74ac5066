use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Extensions accepted as source images. Matching is case-sensitive:
/// `photo.PNG` is not listed.
pub const SOURCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub struct SourceListing {
    /// Source image paths, sorted lexicographically by file name. 1-based
    /// gallery indices are assigned from this order.
    pub images: Vec<PathBuf>,
    /// Directory entries that were not source images.
    pub skipped: usize,
}

/// Enumerate the source images of `dir` in deterministic order. Directory
/// iteration order is platform-dependent, so the listing is sorted before
/// indices are assigned.
pub fn list_source_images(dir: &Path) -> Result<SourceListing> {
    let mut images = Vec::new();
    let mut skipped = 0usize;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_source_extension(&path) {
            images.push(path);
        } else {
            debug!("Skipping non-image entry: {:?}", path);
            skipped += 1;
        }
    }

    images.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    Ok(SourceListing { images, skipped })
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("c.JPG"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let listing = list_source_images(dir.path()).unwrap();
        let names: Vec<_> = listing
            .images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
        assert_eq!(listing.skipped, 3);
    }

    #[test]
    fn jpeg_extension_variants_are_accepted() {
        assert!(has_source_extension(Path::new("x.jpeg")));
        assert!(has_source_extension(Path::new("x.jpg")));
        assert!(has_source_extension(Path::new("x.png")));
        assert!(!has_source_extension(Path::new("x.webp")));
        assert!(!has_source_extension(Path::new("x")));
    }
}
