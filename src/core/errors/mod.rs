//! Error types for the watermark removal pipeline.
//!
//! This module provides the error taxonomy used throughout the crate: invalid
//! input, model loading, per-request inference, detection, and processing
//! failures, plus helper constructors for creating well-structured errors
//! with context and error chaining.
//!
//! # Usage
//!
//! ```rust
//! use doubao_watermark_removal::core::errors::{SimpleError, WatermarkError};
//!
//! let error = WatermarkError::post_processing(
//!     "failed to reshape model output",
//!     SimpleError::new("expected 4 dimensions"),
//! );
//! assert!(error.to_string().contains("reshape"));
//! ```

pub mod constructors;
pub mod types;

pub use types::{ProcessingStage, SimpleError, WatermarkError};

/// Convenient result alias for watermark removal operations.
pub type WmResult<T> = Result<T, WatermarkError>;
