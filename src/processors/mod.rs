//! Image processing utilities: geometry, mask construction, and tensor
//! conversion for the inpainting model.

pub mod geometry;
pub mod mask;
pub mod tensor;

pub use geometry::{BoundingBox, Point};
pub use mask::{MASK_KEEP, MASK_REMOVE, build_removal_mask};
pub use tensor::{MASK_BINARIZE_THRESHOLD, image_to_tensor, mask_to_tensor, tensor_to_image};
