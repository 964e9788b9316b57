//! Tensor conversion for the inpainting model.
//!
//! The model contract is fixed: an image tensor `[1, 3, H, W]` and a mask
//! tensor `[1, 1, H, W]`, both 8-bit unsigned, and an output tensor
//! `[1, 3, H', W']` whose values are clamped to `[0, 255]` and resized back
//! to the source dimensions.

use crate::core::errors::SimpleError;
use crate::core::{Tensor4D, Tensor4DU8, WatermarkError, WmResult};
use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};
use ndarray::Array4;

/// Binarization threshold for mask samples: values above become 255.
pub const MASK_BINARIZE_THRESHOLD: u8 = 127;

/// Converts an RGB image into the model's `[1, 3, H, W]` u8 input tensor.
pub fn image_to_tensor(img: &RgbImage) -> Tensor4DU8 {
    let (width, height) = img.dimensions();
    let mut tensor = Array4::<u8>::zeros((1, 3, height as usize, width as usize));

    for (x, y, pixel) in img.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        tensor[[0, 0, y, x]] = pixel[0];
        tensor[[0, 1, y, x]] = pixel[1];
        tensor[[0, 2, y, x]] = pixel[2];
    }

    tensor
}

/// Converts a mask into the model's `[1, 1, H, W]` u8 input tensor.
///
/// The mask is resized to the target dimensions when it does not already
/// match (bilinear, matching the model's training-time resize), then
/// binarized at [`MASK_BINARIZE_THRESHOLD`] so only {0, 255} reach the model.
pub fn mask_to_tensor(mask: &GrayImage, target_width: u32, target_height: u32) -> Tensor4DU8 {
    let resized;
    let mask = if mask.dimensions() == (target_width, target_height) {
        mask
    } else {
        resized = imageops::resize(mask, target_width, target_height, FilterType::Triangle);
        &resized
    };

    let mut tensor = Array4::<u8>::zeros((1, 1, target_height as usize, target_width as usize));
    for (x, y, pixel) in mask.enumerate_pixels() {
        let value = if pixel[0] > MASK_BINARIZE_THRESHOLD {
            255
        } else {
            0
        };
        tensor[[0, 0, y as usize, x as usize]] = value;
    }

    tensor
}

/// Converts the model's `[1, 3, H', W']` float output back into an RGB image
/// of the original dimensions.
///
/// Sample values are clamped to `[0, 255]` and cast to u8; the image is then
/// resized back to `(original_width, original_height)` since the model may
/// operate at a fixed internal resolution.
pub fn tensor_to_image(
    tensor: &Tensor4D,
    original_width: u32,
    original_height: u32,
) -> WmResult<RgbImage> {
    let shape = tensor.shape();
    if shape[0] != 1 || shape[1] != 3 {
        return Err(WatermarkError::post_processing(
            "unexpected output tensor shape",
            SimpleError::new(format!(
                "expected [1, 3, H, W], got {:?}",
                shape
            )),
        ));
    }

    let (out_height, out_width) = (shape[2], shape[3]);
    let mut img = RgbImage::new(out_width as u32, out_height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (x, y) = (x as usize, y as usize);
        pixel[0] = tensor[[0, 0, y, x]].clamp(0.0, 255.0) as u8;
        pixel[1] = tensor[[0, 1, y, x]].clamp(0.0, 255.0) as u8;
        pixel[2] = tensor[[0, 2, y, x]].clamp(0.0, 255.0) as u8;
    }

    if img.dimensions() != (original_width, original_height) {
        img = imageops::resize(&img, original_width, original_height, FilterType::Triangle);
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn image_tensor_is_channel_first() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([10, 20, 30]));

        let tensor = image_to_tensor(&img);
        assert_eq!(tensor.shape(), &[1, 3, 2, 3]);
        assert_eq!(tensor[[0, 0, 1, 2]], 10);
        assert_eq!(tensor[[0, 1, 1, 2]], 20);
        assert_eq!(tensor[[0, 2, 1, 2]], 30);
        assert_eq!(tensor[[0, 0, 0, 0]], 0);
    }

    #[test]
    fn mask_tensor_binarizes_at_threshold() {
        let mut mask = GrayImage::new(2, 1);
        mask.put_pixel(0, 0, Luma([MASK_BINARIZE_THRESHOLD]));
        mask.put_pixel(1, 0, Luma([MASK_BINARIZE_THRESHOLD + 1]));

        let tensor = mask_to_tensor(&mask, 2, 1);
        assert_eq!(tensor.shape(), &[1, 1, 1, 2]);
        assert_eq!(tensor[[0, 0, 0, 0]], 0);
        assert_eq!(tensor[[0, 0, 0, 1]], 255);
    }

    #[test]
    fn mask_tensor_resizes_to_target_dimensions() {
        let mask = GrayImage::from_pixel(4, 4, Luma([255]));
        let tensor = mask_to_tensor(&mask, 8, 6);
        assert_eq!(tensor.shape(), &[1, 1, 6, 8]);
        assert!(tensor.iter().all(|&v| v == 255));
    }

    #[test]
    fn output_tensor_round_trips_to_original_dimensions() {
        // Model output at an internal 4x4 resolution, source image 6x3.
        let tensor = Array4::<f32>::from_elem((1, 3, 4, 4), 128.0);
        let img = tensor_to_image(&tensor, 6, 3).unwrap();
        assert_eq!(img.dimensions(), (6, 3));
    }

    #[test]
    fn output_samples_are_clamped() {
        let mut tensor = Array4::<f32>::zeros((1, 3, 1, 2));
        tensor[[0, 0, 0, 0]] = -42.0;
        tensor[[0, 1, 0, 0]] = 300.0;
        tensor[[0, 2, 0, 0]] = 64.5;

        let img = tensor_to_image(&tensor, 2, 1).unwrap();
        let pixel = img.get_pixel(0, 0);
        assert_eq!(pixel[0], 0);
        assert_eq!(pixel[1], 255);
        assert_eq!(pixel[2], 64);
    }

    #[test]
    fn output_with_wrong_channel_count_is_rejected() {
        let tensor = Array4::<f32>::zeros((1, 1, 4, 4));
        assert!(tensor_to_image(&tensor, 4, 4).is_err());
    }
}
