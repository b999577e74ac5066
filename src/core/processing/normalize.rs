use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::core::params::NormalizeParams;
use crate::error::{Error, Result};

/// Flatten an alpha channel by compositing over an opaque white background.
/// Inputs without alpha convert straight to RGB.
pub fn flatten_alpha(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flat = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u32::from(pixel[3]);
        let blend = |channel: u8| ((u32::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8;
        flat.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }
    flat
}

pub fn resize_rgb_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Cut the centered `min_side` square out of an interleaved RGB buffer.
/// Returns the cropped buffer and its side length.
pub fn crop_center_square(data: &[u8], cols: u32, rows: u32) -> (Vec<u8>, u32) {
    let min_side = cols.min(rows);
    let left = ((cols - min_side) / 2) as usize;
    let top = ((rows - min_side) / 2) as usize;
    let side = min_side as usize;
    let src_stride = cols as usize * 3;

    let mut cropped = Vec::with_capacity(side * side * 3);
    for row in 0..side {
        let offset = (top + row) * src_stride + left * 3;
        cropped.extend_from_slice(&data[offset..offset + side * 3]);
    }
    (cropped, min_side)
}

/// Produce the canonical square rendition of a source image.
///
/// Precedence: undersized inputs (either side below `general_size`) are
/// stretched whole to `general_size`, even when square; otherwise square
/// inputs resize to `square_size` and non-square inputs center-crop to their
/// short side before resizing to `general_size`. With `rescale` off the
/// source passes through untouched apart from alpha flattening.
pub fn normalize(img: DynamicImage, params: &NormalizeParams) -> Result<RgbImage> {
    let rgb = flatten_alpha(img);
    if !params.rescale {
        return Ok(rgb);
    }

    let (width, height) = rgb.dimensions();
    let (side, data) = if width < params.general_size || height < params.general_size {
        debug!(
            "Undersized input {}x{}, stretching to {}",
            width, height, params.general_size
        );
        let resized = resize_rgb_image(
            rgb.as_raw(),
            width,
            height,
            params.general_size,
            params.general_size,
        )?;
        (params.general_size, resized)
    } else if width == height {
        debug!("Square input {}x{}, resizing to {}", width, height, params.square_size);
        let resized = resize_rgb_image(
            rgb.as_raw(),
            width,
            height,
            params.square_size,
            params.square_size,
        )?;
        (params.square_size, resized)
    } else {
        let (cropped, min_side) = crop_center_square(rgb.as_raw(), width, height);
        debug!(
            "Center-cropped {}x{} to {}, resizing to {}",
            width, height, min_side, params.general_size
        );
        let resized = resize_rgb_image(
            &cropped,
            min_side,
            min_side,
            params.general_size,
            params.general_size,
        )?;
        (params.general_size, resized)
    };

    RgbImage::from_raw(side, side, data)
        .ok_or_else(|| Error::Processing("resized buffer does not match target dimensions".into()))
}
