//! Core infrastructure: error handling, configuration, and session loading.

pub mod config;
pub mod errors;
pub(crate) mod inference;

pub use config::{InpaintEngineConfig, OrtGraphOptimizationLevel, OrtSessionConfig};
pub use errors::{ProcessingStage, SimpleError, WatermarkError, WmResult};

/// A 4-D f32 tensor in NCHW layout, used for float model outputs.
pub type Tensor4D = ndarray::Array4<f32>;

/// A 4-D u8 tensor in NCHW layout, used for the engine's model inputs.
pub type Tensor4DU8 = ndarray::Array4<u8>;
