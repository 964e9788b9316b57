//! # Doubao Watermark Removal
//!
//! A Rust library that detects and removes the Doubao (豆包) AI-generator
//! text watermark from raster images using a learned ONNX inpainting model.
//!
//! ## Pipeline
//!
//! 1. **Text detection** — an external [`domain::TextDetector`]
//!    implementation scans the full frame and reports
//!    (quad, text, confidence) candidates.
//! 2. **Classification** — each candidate is tested against an ordered rule
//!    set ([`classification::WatermarkClassifier`]): stylized brand variants
//!    are accepted at any confidence, generic keyword hits need confidence
//!    above 0.5.
//! 3. **Mask construction** — accepted detections become axis-aligned
//!    regions zeroed into a full-frame binary mask.
//! 4. **Inpainting** — the [`inpaint::InpaintEngine`] feeds the image and
//!    mask to the model and resizes the reconstruction back to the source
//!    dimensions.
//!
//! Images with no accepted detection are returned unchanged without
//! invoking the model.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doubao_watermark_removal::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn detector() -> Arc<dyn doubao_watermark_removal::domain::TextDetector> { unimplemented!() }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Arc::new(InpaintEngine::from_file("models/migan_pipeline_v2.onnx")?);
//! let remover = WatermarkRemover::new(detector(), engine);
//!
//! let image = load_image(Path::new("generated.png"))?;
//! let cleaned = remover.remove_watermark(&image)?;
//! cleaned.save("cleaned.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! * [`core`] - Error handling, configuration, and session loading
//! * [`domain`] - Detection and region types, the detector capability
//! * [`classification`] - Watermark rule matching
//! * [`processors`] - Geometry, mask construction, tensor conversion
//! * [`inpaint`] - The ONNX inpainting engine
//! * [`pipeline`] - The `remove_watermark` orchestrator
//! * [`utils`] - Image loading helpers

pub mod classification;
pub mod core;
pub mod domain;
pub mod inpaint;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use doubao_watermark_removal::prelude::*;
/// ```
pub mod prelude {
    // Pipeline (essential)
    pub use crate::pipeline::WatermarkRemover;

    // Components
    pub use crate::classification::WatermarkClassifier;
    pub use crate::domain::{TextDetection, TextDetector};
    pub use crate::inpaint::{InpaintEngine, Inpainter};

    // Error handling (essential)
    pub use crate::core::{WatermarkError, WmResult};

    // Image utility (minimal)
    pub use crate::utils::load_image;
}
