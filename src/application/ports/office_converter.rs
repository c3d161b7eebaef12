use std::path::Path;

use async_trait::async_trait;

use crate::application::scope::Cancellation;
use crate::domain::ConvertOptions;

/// Converts a single office document into a PDF.
#[async_trait]
pub trait OfficeConverter: Send + Sync {
    async fn pdf(
        &self,
        cancellation: &Cancellation,
        input_path: &Path,
        output_path: &Path,
        options: &ConvertOptions,
    ) -> Result<(), OfficeConverterError>;

    /// File extensions this converter accepts, lower-cased with a leading dot.
    fn extensions(&self) -> &[String];
}

#[derive(Debug, thiserror::Error)]
pub enum OfficeConverterError {
    #[error("malformed page ranges: '{0}'")]
    MalformedPageRanges(String),
    #[error("PDF format not available: {0}")]
    PdfFormatNotAvailable(String),
    #[error("conversion cancelled")]
    Cancelled,
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
}
