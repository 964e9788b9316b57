//! Error type definitions for the watermark removal pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Stages of per-image processing where an error can occur.
///
/// The stage is carried inside [`WatermarkError::Processing`] so that callers
/// can tell a tensor-layout failure apart from a resize failure without
/// parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Converting an image or mask into a model input tensor.
    Preprocessing,
    /// Converting a model output tensor back into an image.
    PostProcessing,
    /// A processing step that does not fit the other stages.
    Generic,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Preprocessing => write!(f, "preprocessing"),
            ProcessingStage::PostProcessing => write!(f, "post-processing"),
            ProcessingStage::Generic => write!(f, "processing"),
        }
    }
}

/// A minimal error type for wrapping a plain message as an error source.
///
/// Used where an invariant violation is detected locally and there is no
/// underlying error value to chain.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    /// Creates a new SimpleError with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors produced by the watermark removal pipeline.
///
/// The variants follow the pipeline's error taxonomy:
///
/// * [`WatermarkError::InvalidInput`] / [`WatermarkError::ImageLoad`] —
///   the caller's image is empty or cannot be decoded.
/// * [`WatermarkError::ModelLoad`] — the inpainting artifact is missing or
///   its input/output contract does not match expectations. Raised at engine
///   construction time; indicates a deployment problem, not a per-request one.
/// * [`WatermarkError::Inference`] — a model invocation failed for one image.
/// * [`WatermarkError::Detection`] — the text detection capability failed.
///   Propagated as a failure, never silently mapped to "no watermark found".
/// * [`WatermarkError::Processing`] — tensor layout or resize failures in
///   pre/post-processing.
#[derive(Debug, Error)]
pub enum WatermarkError {
    /// The input image was empty or otherwise unusable.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        message: String,
    },

    /// The input image could not be decoded.
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// The inpainting model artifact could not be loaded or its tensor
    /// contract does not match what the engine expects.
    #[error("failed to load model at '{}': {context}", path.display())]
    ModelLoad {
        /// Path of the model artifact.
        path: PathBuf,
        /// What went wrong, including any remediation suggestion.
        context: String,
        /// Underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A model invocation failed while processing an image.
    #[error("inference failed for model '{model_name}': {context}")]
    Inference {
        /// Name of the model that failed.
        model_name: String,
        /// What the engine was doing when the failure occurred.
        context: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The text detection capability failed.
    #[error("text detection failed: {context}")]
    Detection {
        /// What the detector was doing when the failure occurred.
        context: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An image/tensor processing step failed.
    #[error("{stage} failed: {context}")]
    Processing {
        /// The stage the failure occurred in.
        stage: ProcessingStage,
        /// What the step was doing when the failure occurred.
        context: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An ONNX Runtime error outside the scopes above (session builder setup).
    #[error("ONNX Runtime error: {0}")]
    Ort(#[from] ort::Error),

    /// A tensor shape error from ndarray.
    #[error("tensor shape error: {0}")]
    Tensor(#[from] ndarray::ShapeError),
}
