//! Text detection types and the detector capability consumed by the pipeline.

use crate::core::WmResult;
use crate::processors::BoundingBox;
use image::RgbImage;
use std::sync::Arc;

/// A single text candidate produced by a text detector.
///
/// Detections are read-only once produced; the pipeline derives regions from
/// them but never mutates them.
#[derive(Debug, Clone)]
pub struct TextDetection {
    /// The detection quadrilateral, points ordered top-left, top-right,
    /// bottom-right, bottom-left.
    pub quad: BoundingBox,
    /// The recognized text.
    pub text: Arc<str>,
    /// The detector's confidence in the recognized text, in `[0, 1]`.
    pub confidence: f32,
}

impl TextDetection {
    /// Creates a new detection from its quad, text, and confidence.
    pub fn new(quad: BoundingBox, text: impl Into<Arc<str>>, confidence: f32) -> Self {
        Self {
            quad,
            text: text.into(),
            confidence,
        }
    }
}

/// The text detection capability the pipeline consumes.
///
/// Implementations wrap whatever OCR service is available (a local model, a
/// remote endpoint, a test stub). The whole frame is scanned on every call;
/// the pipeline never restricts detection to a sub-region.
///
/// A failing detector must return an error: the pipeline treats detector
/// failure as a pipeline failure rather than assuming "no watermark found".
/// Use [`crate::core::WatermarkError::detection_error`] to wrap the
/// underlying failure.
pub trait TextDetector: Send + Sync {
    /// Detects text candidates over the full image.
    fn detect(&self, image: &RgbImage) -> WmResult<Vec<TextDetection>>;
}
