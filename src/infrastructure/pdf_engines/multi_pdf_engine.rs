use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{PdfEngine, PdfEngineError};
use crate::application::scope::Cancellation;
use crate::domain::PdfFormat;

/// Tries each engine in turn until one succeeds.
///
/// Engines that cannot perform an operation are skipped. A convert that no engine
/// can perform reports [`PdfEngineError::FormatNotAvailable`].
pub struct MultiPdfEngine {
    engines: Vec<(String, Arc<dyn PdfEngine>)>,
}

impl MultiPdfEngine {
    pub fn new(engines: Vec<(String, Arc<dyn PdfEngine>)>) -> Self {
        Self { engines }
    }

    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.iter().map(|(name, _)| name.as_str()).collect()
    }
}

#[async_trait]
impl PdfEngine for MultiPdfEngine {
    async fn merge(
        &self,
        cancellation: &Cancellation,
        input_paths: &[PathBuf],
        output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        let mut failures: Vec<String> = Vec::new();

        for (name, engine) in &self.engines {
            match engine.merge(cancellation, input_paths, output_path).await {
                Ok(()) => {
                    tracing::debug!(engine = %name, "PDF merge succeeded");
                    return Ok(());
                }
                Err(PdfEngineError::Cancelled) => return Err(PdfEngineError::Cancelled),
                Err(e) if e.is_not_available() => {
                    tracing::trace!(engine = %name, "Engine cannot merge");
                }
                Err(e) => {
                    tracing::warn!(
                        engine = %name,
                        error = %e,
                        "PDF merge failed, trying next engine"
                    );
                    failures.push(format!("{name}: {e}"));
                }
            }
        }

        if failures.is_empty() {
            Err(PdfEngineError::MethodNotAvailable("merge"))
        } else {
            Err(PdfEngineError::MergeFailed(failures.join("; ")))
        }
    }

    async fn convert(
        &self,
        cancellation: &Cancellation,
        format: &PdfFormat,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        let mut failures: Vec<String> = Vec::new();

        for (name, engine) in &self.engines {
            match engine
                .convert(cancellation, format, input_path, output_path)
                .await
            {
                Ok(()) => {
                    tracing::debug!(
                        engine = %name,
                        format = %format,
                        "PDF conversion succeeded"
                    );
                    return Ok(());
                }
                Err(PdfEngineError::Cancelled) => return Err(PdfEngineError::Cancelled),
                Err(e) if e.is_not_available() => {
                    tracing::trace!(engine = %name, format = %format, "Engine cannot convert");
                }
                Err(e) => {
                    tracing::warn!(
                        engine = %name,
                        error = %e,
                        "PDF conversion failed, trying next engine"
                    );
                    failures.push(format!("{name}: {e}"));
                }
            }
        }

        if failures.is_empty() {
            Err(PdfEngineError::FormatNotAvailable(format.to_string()))
        } else {
            Err(PdfEngineError::ConversionFailed(failures.join("; ")))
        }
    }
}
