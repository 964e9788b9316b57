//! ONNX Runtime configuration types.
//!
//! These types let deployments tune session behavior (threading, graph
//! optimization, pooling) without touching engine code. All types are
//! serde-enabled so they can be loaded from configuration files.

use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use serde::{Deserialize, Serialize};

/// Graph optimization levels for ONNX Runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OrtGraphOptimizationLevel {
    /// Disable all optimizations.
    DisableAll,
    /// Enable basic optimizations.
    Level1,
    /// Enable extended optimizations.
    Level2,
    /// Enable all optimizations.
    Level3,
    /// Enable all optimizations (alias for Level3).
    All,
}

impl Default for OrtGraphOptimizationLevel {
    fn default() -> Self {
        Self::Level1
    }
}

impl From<OrtGraphOptimizationLevel> for GraphOptimizationLevel {
    fn from(level: OrtGraphOptimizationLevel) -> Self {
        match level {
            OrtGraphOptimizationLevel::DisableAll => GraphOptimizationLevel::Disable,
            OrtGraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
            OrtGraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
            OrtGraphOptimizationLevel::Level3 | OrtGraphOptimizationLevel::All => {
                GraphOptimizationLevel::Level3
            }
        }
    }
}

/// Configuration for ONNX Runtime sessions.
///
/// Only the knobs relevant to CPU inference are exposed; the inpainting and
/// detection models this crate targets run without accelerator providers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrtSessionConfig {
    /// Number of threads used to parallelize execution within nodes.
    pub intra_threads: Option<usize>,
    /// Number of threads used to parallelize execution across nodes.
    pub inter_threads: Option<usize>,
    /// Enable parallel execution mode.
    pub parallel_execution: Option<bool>,
    /// Graph optimization level.
    pub optimization_level: Option<OrtGraphOptimizationLevel>,
}

impl OrtSessionConfig {
    /// Creates a new OrtSessionConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of intra-op threads.
    pub fn with_intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = Some(threads);
        self
    }

    /// Sets the number of inter-op threads.
    pub fn with_inter_threads(mut self, threads: usize) -> Self {
        self.inter_threads = Some(threads);
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel_execution(mut self, enabled: bool) -> Self {
        self.parallel_execution = Some(enabled);
        self
    }

    /// Sets the graph optimization level.
    pub fn with_optimization_level(mut self, level: OrtGraphOptimizationLevel) -> Self {
        self.optimization_level = Some(level);
        self
    }

    /// Applies this configuration to an ONNX Runtime session builder.
    pub fn apply(&self, mut builder: SessionBuilder) -> Result<SessionBuilder, ort::Error> {
        if let Some(threads) = self.intra_threads {
            builder = builder.with_intra_threads(threads)?;
        }
        if let Some(threads) = self.inter_threads {
            builder = builder.with_inter_threads(threads)?;
        }
        if let Some(enabled) = self.parallel_execution {
            builder = builder.with_parallel_execution(enabled)?;
        }
        if let Some(level) = self.optimization_level {
            builder = builder.with_optimization_level(level.into())?;
        }
        Ok(builder)
    }
}

/// Configuration for constructing an [`crate::inpaint::InpaintEngine`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InpaintEngineConfig {
    /// Number of pooled sessions for concurrent inference.
    ///
    /// A pool of size 1 (the default) serializes all inference through a
    /// single session mutex; larger pools give one session per concurrent
    /// worker.
    pub session_pool_size: Option<usize>,
    /// ONNX Runtime session settings applied to every pooled session.
    pub ort_session: Option<OrtSessionConfig>,
}

impl InpaintEngineConfig {
    /// Creates a new InpaintEngineConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session pool size.
    pub fn with_session_pool_size(mut self, size: usize) -> Self {
        self.session_pool_size = Some(size);
        self
    }

    /// Sets the ONNX Runtime session configuration.
    pub fn with_ort_session(mut self, config: OrtSessionConfig) -> Self {
        self.ort_session = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_set_fields() {
        let config = OrtSessionConfig::new()
            .with_intra_threads(4)
            .with_parallel_execution(true)
            .with_optimization_level(OrtGraphOptimizationLevel::Level3);
        assert_eq!(config.intra_threads, Some(4));
        assert_eq!(config.parallel_execution, Some(true));
        assert!(config.optimization_level.is_some());
    }

    #[test]
    fn engine_config_defaults_to_unset_pool() {
        let config = InpaintEngineConfig::new();
        assert!(config.session_pool_size.is_none());
        assert!(config.ort_session.is_none());
    }
}
