//! The watermark removal pipeline orchestrator.

mod remover;

pub use remover::WatermarkRemover;
