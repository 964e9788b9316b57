//! Learned inpainting over ONNX Runtime.

mod engine;

pub use engine::{InpaintEngine, Inpainter};
