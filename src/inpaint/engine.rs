//! ONNX inpainting engine with session pooling.

use crate::core::errors::SimpleError;
use crate::core::inference::load_session_with;
use crate::core::{InpaintEngineConfig, Tensor4D, WatermarkError, WmResult};
use crate::processors::{image_to_tensor, mask_to_tensor, tensor_to_image};
use image::{GrayImage, RgbImage};
use ndarray::ArrayView4;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::value::TensorRef;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// The reconstruction capability consumed by the pipeline.
///
/// Implemented by [`InpaintEngine`]; test code substitutes stubs so the
/// pipeline can be exercised without a model artifact.
pub trait Inpainter: Send + Sync {
    /// Reconstructs the masked pixels of `image`.
    ///
    /// Callers must only invoke this when `mask` contains at least one
    /// pixel to reconstruct; the pipeline short-circuits the no-watermark
    /// case before reaching the engine.
    fn inpaint(&self, image: &RgbImage, mask: &GrayImage) -> WmResult<RgbImage>;
}

/// Inpainting engine wrapping a pool of ONNX Runtime sessions for one model.
///
/// The model contract is resolved once at construction: the artifact must
/// declare exactly two inputs (index 0 the image tensor, index 1 the mask
/// tensor, bound in manifest order) and at least one output. A contract
/// mismatch is a [`WatermarkError::ModelLoad`], surfaced distinctly from
/// per-image failures.
///
/// The engine is stateless with respect to individual images and is safe to
/// share across threads: every inference call locks one pooled session for
/// its duration, selected round-robin.
pub struct InpaintEngine {
    sessions: Vec<Mutex<Session>>,
    next_idx: AtomicUsize,
    image_input: String,
    mask_input: String,
    output_name: String,
    model_name: String,
    model_path: PathBuf,
}

impl std::fmt::Debug for InpaintEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InpaintEngine")
            .field("sessions", &self.sessions.len())
            .field("image_input", &self.image_input)
            .field("mask_input", &self.mask_input)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .finish()
    }
}

impl InpaintEngine {
    /// Loads the inpainting model with default settings and a single session.
    pub fn from_file(model_path: impl AsRef<Path>) -> WmResult<Self> {
        Self::with_config(model_path, &InpaintEngineConfig::default())
    }

    /// Loads the inpainting model, applying session configuration and
    /// constructing a session pool for concurrent inference.
    pub fn with_config(
        model_path: impl AsRef<Path>,
        config: &InpaintEngineConfig,
    ) -> WmResult<Self> {
        let path = model_path.as_ref();
        let pool_size = config.session_pool_size.unwrap_or(1).max(1);

        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let session = load_session_with(
                path,
                |builder| {
                    let builder = builder.with_log_level(LogLevel::Error)?;
                    match &config.ort_session {
                        Some(cfg) => cfg.apply(builder),
                        None => Ok(builder),
                    }
                },
                Some("verify the inpainting model file exists and is readable"),
            )?;
            sessions.push(session);
        }

        let (image_input, mask_input, output_name) = Self::resolve_contract(path, &sessions[0])?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        debug!(
            "loaded inpainting model '{}' with {} session(s), inputs '{}'/'{}', output '{}'",
            model_name,
            sessions.len(),
            image_input,
            mask_input,
            output_name
        );

        Ok(Self {
            sessions: sessions.into_iter().map(Mutex::new).collect(),
            next_idx: AtomicUsize::new(0),
            image_input,
            mask_input,
            output_name,
            model_name,
            model_path: path.to_path_buf(),
        })
    }

    /// Checks the loaded model against the fixed two-input/one-output
    /// contract and returns the resolved tensor names.
    fn resolve_contract(
        path: &Path,
        session: &Session,
    ) -> WmResult<(String, String, String)> {
        if session.inputs.len() != 2 {
            return Err(WatermarkError::model_contract_error(
                path,
                format!(
                    "expected exactly 2 model inputs (image, mask), found {}",
                    session.inputs.len()
                ),
            ));
        }
        let image_input = session.inputs[0].name.clone();
        let mask_input = session.inputs[1].name.clone();

        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| {
                WatermarkError::model_contract_error(path, "model declares no outputs")
            })?;

        Ok((image_input, mask_input, output_name))
    }

    /// Returns the model path associated with this engine.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Returns the model name associated with this engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl Inpainter for InpaintEngine {
    fn inpaint(&self, image: &RgbImage, mask: &GrayImage) -> WmResult<RgbImage> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(WatermarkError::invalid_input("image has zero dimensions"));
        }

        let image_tensor = image_to_tensor(image);
        let mask_tensor = mask_to_tensor(mask, width, height);

        let image_value = TensorRef::from_array_view(image_tensor.view()).map_err(|e| {
            WatermarkError::inference_error(
                &self.model_name,
                "failed to convert image tensor for inference",
                e,
            )
        })?;
        let mask_value = TensorRef::from_array_view(mask_tensor.view()).map_err(|e| {
            WatermarkError::inference_error(
                &self.model_name,
                "failed to convert mask tensor for inference",
                e,
            )
        })?;

        let inputs = ort::inputs![
            self.image_input.as_str() => image_value,
            self.mask_input.as_str() => mask_value
        ];

        let idx = self.next_idx.fetch_add(1, Ordering::Relaxed) % self.sessions.len();
        let mut session_guard = self.sessions[idx].lock().map_err(|_| {
            WatermarkError::inference_error(
                &self.model_name,
                "failed to acquire session lock",
                SimpleError::new("session mutex poisoned"),
            )
        })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            WatermarkError::inference_error(
                &self.model_name,
                "ONNX Runtime inference failed",
                e,
            )
        })?;

        // MI-GAN pipeline exports emit either f32 or already-quantized u8.
        let output = &outputs[self.output_name.as_str()];
        let reconstructed = match output.try_extract_tensor::<f32>() {
            Ok((shape, data)) => self.postprocess_f32(shape, data, width, height)?,
            Err(_) => {
                let (shape, data) = output.try_extract_tensor::<u8>().map_err(|e| {
                    WatermarkError::inference_error(
                        &self.model_name,
                        "output tensor is neither f32 nor u8",
                        e,
                    )
                })?;
                let data: Vec<f32> = data.iter().map(|&v| v as f32).collect();
                self.postprocess_f32(shape, &data, width, height)?
            }
        };

        Ok(reconstructed)
    }
}

impl InpaintEngine {
    /// Validates the raw output tensor and converts it back into an image of
    /// the original dimensions.
    fn postprocess_f32(
        &self,
        shape: &[i64],
        data: &[f32],
        original_width: u32,
        original_height: u32,
    ) -> WmResult<RgbImage> {
        if shape.len() != 4 {
            return Err(WatermarkError::post_processing(
                "unexpected output tensor rank",
                SimpleError::new(format!(
                    "model '{}': expected 4-D output, got {}-D with shape {:?}",
                    self.model_name,
                    shape.len(),
                    shape
                )),
            ));
        }

        let dims = (
            shape[0] as usize,
            shape[1] as usize,
            shape[2] as usize,
            shape[3] as usize,
        );
        let expected_len = dims.0 * dims.1 * dims.2 * dims.3;
        if data.len() != expected_len {
            return Err(WatermarkError::post_processing(
                "output data size mismatch",
                SimpleError::new(format!(
                    "expected {} samples, got {}",
                    expected_len,
                    data.len()
                )),
            ));
        }

        let tensor: Tensor4D = ArrayView4::from_shape(dims, data)?.to_owned();
        tensor_to_image(&tensor, original_width, original_height)
    }
}
