use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{OfficeConverterError, PdfEngine, PdfEngineError};
use crate::application::scope::Cancellation;
use crate::domain::{ConvertOptions, PdfFormat};
use crate::infrastructure::office::Unoconv;

/// Converts PDFs to PDF/A by round-tripping them through the office suite.
pub struct UnoconvPdfEngine {
    unoconv: Arc<Unoconv>,
}

impl UnoconvPdfEngine {
    pub fn new(unoconv: Arc<Unoconv>) -> Self {
        Self { unoconv }
    }
}

#[async_trait]
impl PdfEngine for UnoconvPdfEngine {
    async fn merge(
        &self,
        _cancellation: &Cancellation,
        _input_paths: &[PathBuf],
        _output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        Err(PdfEngineError::MethodNotAvailable("merge"))
    }

    async fn convert(
        &self,
        cancellation: &Cancellation,
        format: &PdfFormat,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        let options = ConvertOptions {
            native_pdf_format: Some(format.clone()),
            ..ConvertOptions::default()
        };

        self.unoconv
            .pdf(cancellation, input_path, output_path, &options)
            .await
            .map_err(|e| match e {
                OfficeConverterError::PdfFormatNotAvailable(format) => {
                    PdfEngineError::FormatNotAvailable(format)
                }
                OfficeConverterError::Cancelled => PdfEngineError::Cancelled,
                e => PdfEngineError::ConversionFailed(e.to_string()),
            })
    }
}
