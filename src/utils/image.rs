//! Utility functions for image loading and conversion.
//!
//! The pipeline consumes 8-bit RGB images; these helpers normalize whatever
//! the caller decodes (grayscale scans, RGBA exports) into that layout
//! before detection and inpainting run.

use crate::core::{WatermarkError, WmResult};
use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage};

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Converts a DynamicImage to a GrayImage.
pub fn dynamic_to_gray(img: DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// # Errors
///
/// Returns a [`WatermarkError::ImageLoad`] error if the image cannot be
/// decoded from the specified path.
pub fn load_image(path: &std::path::Path) -> WmResult<RgbImage> {
    let img = image::open(path).map_err(WatermarkError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an RgbImage from raw RGB pixel data.
///
/// Returns `None` when the data length does not match the dimensions.
pub fn create_rgb_image(width: u32, height: u32, data: Vec<u8>) -> Option<RgbImage> {
    if data.len() != (width as usize) * (height as usize) * 3 {
        return None;
    }

    ImageBuffer::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rgba_input_is_normalized_to_rgb() {
        let rgba = image::RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 200]));
        let rgb = dynamic_to_rgb(DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.dimensions(), (2, 2));
        assert_eq!(rgb.get_pixel(0, 0).0, [1, 2, 3]);
    }

    #[test]
    fn create_rgb_image_validates_length() {
        assert!(create_rgb_image(2, 2, vec![0; 12]).is_some());
        assert!(create_rgb_image(2, 2, vec![0; 11]).is_none());
    }

    #[test]
    fn load_image_reports_missing_file() {
        let result = load_image(std::path::Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(WatermarkError::ImageLoad(_))));
    }
}
