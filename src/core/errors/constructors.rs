//! Constructor helpers for [`WatermarkError`].
//!
//! These keep error creation at call sites terse while still producing
//! well-structured errors with context and chained sources.

use super::types::{ProcessingStage, WatermarkError};
use std::path::Path;

impl WatermarkError {
    /// Creates an error for invalid caller input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an error for a model artifact that failed to load.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the model artifact.
    /// * `context` - What went wrong.
    /// * `suggestion` - Optional remediation hint appended to the context.
    /// * `source` - Underlying error, when one exists.
    pub fn model_load_error(
        path: &Path,
        context: &str,
        suggestion: Option<&str>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let context = match suggestion {
            Some(hint) => format!("{context} ({hint})"),
            None => context.to_string(),
        };
        Self::ModelLoad {
            path: path.to_path_buf(),
            context,
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Creates an error for a model contract violation discovered while
    /// inspecting a loaded session's inputs or outputs.
    pub fn model_contract_error(path: &Path, context: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.to_path_buf(),
            context: context.into(),
            source: None,
        }
    }

    /// Creates an error for a failed model invocation.
    pub fn inference_error(
        model_name: &str,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Inference {
            model_name: model_name.to_string(),
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an error for a failed text detection call.
    pub fn detection_error(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Detection {
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an error for a failed processing step at the given stage.
    pub fn processing_error(
        stage: ProcessingStage,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            stage,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an error for a failed preprocessing step.
    pub fn pre_processing(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::processing_error(ProcessingStage::Preprocessing, context, error)
    }

    /// Creates an error for a failed post-processing step.
    pub fn post_processing(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::processing_error(ProcessingStage::PostProcessing, context, error)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SimpleError;
    use super::*;

    #[test]
    fn model_load_error_appends_suggestion() {
        let err = WatermarkError::model_load_error(
            Path::new("models/inpaint.onnx"),
            "failed to create ONNX session",
            Some("verify model file exists and is readable"),
            None::<SimpleError>,
        );
        let message = err.to_string();
        assert!(message.contains("models/inpaint.onnx"));
        assert!(message.contains("verify model file exists"));
    }

    #[test]
    fn processing_error_reports_stage() {
        let err =
            WatermarkError::post_processing("unexpected output rank", SimpleError::new("rank 3"));
        assert!(err.to_string().starts_with("post-processing failed"));
    }
}
