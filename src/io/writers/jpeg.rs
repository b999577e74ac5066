use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

pub fn write_rgb_jpeg(
    output: &Path,
    width: u32,
    height: u32,
    rgb_data: &[u8],
    quality: u8,
) -> Result<()> {
    let cols = u16::try_from(width).map_err(|_| Error::OversizedImage { width, height })?;
    let rows = u16::try_from(height).map_err(|_| Error::OversizedImage { width, height })?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder.encode(rgb_data, cols, rows, ColorType::Rgb)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_jpeg_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = image::RgbImage::from_pixel(16, 8, image::Rgb([10, 200, 60]));
        write_rgb_jpeg(&path, 16, 8, img.as_raw(), 90).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (16, 8));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.jpg");
        let err = write_rgb_jpeg(&path, 70_000, 8, &[], 90).unwrap_err();
        assert!(matches!(err, Error::OversizedImage { .. }));
    }
}
