//! Watermark removal orchestration.

use crate::classification::WatermarkClassifier;
use crate::core::{WatermarkError, WmResult};
use crate::domain::{Region, TextDetector};
use crate::inpaint::Inpainter;
use crate::processors::build_removal_mask;
use image::RgbImage;
use std::sync::Arc;
use tracing::debug;

/// The watermark removal pipeline.
///
/// Composes a text detector, a watermark classifier, and an inpainter into
/// `remove_watermark(image) -> image`. The detector and inpainter are
/// explicit dependencies constructed once at startup and shared by
/// reference; the pipeline itself holds no per-image state and introduces no
/// concurrency.
pub struct WatermarkRemover {
    detector: Arc<dyn TextDetector>,
    classifier: WatermarkClassifier,
    inpainter: Arc<dyn Inpainter>,
}

impl WatermarkRemover {
    /// Creates a pipeline with the default Doubao classification rules.
    pub fn new(detector: Arc<dyn TextDetector>, inpainter: Arc<dyn Inpainter>) -> Self {
        Self::with_classifier(detector, WatermarkClassifier::doubao(), inpainter)
    }

    /// Creates a pipeline with a custom classifier.
    pub fn with_classifier(
        detector: Arc<dyn TextDetector>,
        classifier: WatermarkClassifier,
        inpainter: Arc<dyn Inpainter>,
    ) -> Self {
        Self {
            detector,
            classifier,
            inpainter,
        }
    }

    /// Returns the classifier used to filter detections.
    pub fn classifier(&self) -> &WatermarkClassifier {
        &self.classifier
    }

    /// Removes the watermark from an image.
    ///
    /// The whole frame is scanned for text, detections are filtered through
    /// the classifier, and accepted regions are masked and reconstructed by
    /// the inpainter. When no detection is accepted the original image is
    /// returned unchanged and the inpainter is never invoked.
    ///
    /// # Errors
    ///
    /// Detector and inpainter failures propagate to the caller; there are no
    /// retries and no silent fallback to the original image.
    pub fn remove_watermark(&self, image: &RgbImage) -> WmResult<RgbImage> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(WatermarkError::invalid_input("image has zero dimensions"));
        }

        let detections = self.detector.detect(image)?;
        debug!("text detection returned {} candidates", detections.len());

        let mut regions: Vec<Region> = Vec::new();
        for detection in &detections {
            let Some(rule) = self
                .classifier
                .classify(&detection.text, detection.confidence)
            else {
                continue;
            };

            match Region::from_quad(&detection.quad, width, height) {
                Some(region) if !region.is_empty() => {
                    debug!(
                        "accepted watermark candidate '{}' (confidence {:.2}, rule '{}')",
                        detection.text,
                        detection.confidence,
                        rule.name()
                    );
                    regions.push(region);
                }
                _ => {
                    debug!(
                        "discarding degenerate region for candidate '{}'",
                        detection.text
                    );
                }
            }
        }

        if regions.is_empty() {
            debug!("no watermark regions accepted, returning original image");
            return Ok(image.clone());
        }

        let mask = build_removal_mask((width, height), &regions);
        self.inpainter.inpaint(image, &mask)
    }
}
