use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::scope::Cancellation;
use crate::domain::PdfFormat;

/// Manipulates existing PDF files.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Concatenates `input_paths`, in order, into `output_path`.
    async fn merge(
        &self,
        cancellation: &Cancellation,
        input_paths: &[PathBuf],
        output_path: &Path,
    ) -> Result<(), PdfEngineError>;

    /// Rewrites `input_path` as `format` into `output_path`.
    async fn convert(
        &self,
        cancellation: &Cancellation,
        format: &PdfFormat,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), PdfEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfEngineError {
    #[error("PDF format not available: {0}")]
    FormatNotAvailable(String),
    #[error("method not available: {0}")]
    MethodNotAvailable(&'static str),
    #[error("operation cancelled")]
    Cancelled,
    #[error("merge failed: {0}")]
    MergeFailed(String),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
}

impl PdfEngineError {
    /// True when the engine cannot do the requested work at all, as opposed to failing at it.
    pub fn is_not_available(&self) -> bool {
        matches!(
            self,
            PdfEngineError::FormatNotAvailable(_) | PdfEngineError::MethodNotAvailable(_)
        )
    }
}
