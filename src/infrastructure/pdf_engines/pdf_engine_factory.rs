use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::PdfEngine;
use crate::infrastructure::office::Unoconv;
use crate::presentation::config::PdfEngineSettings;

use super::multi_pdf_engine::MultiPdfEngine;
use super::qpdf_engine::QpdfEngine;
use super::unoconv_pdf_engine::UnoconvPdfEngine;

pub struct PdfEngineFactory;

#[derive(Debug, thiserror::Error)]
pub enum PdfEngineFactoryError {
    #[error("unknown PDF engine '{0}' (expected qpdf or unoconv)")]
    UnknownEngine(String),
    #[error("no PDF engine configured")]
    NoEngines,
}

impl PdfEngineFactory {
    /// Builds the engines listed in `settings.engines`, preserving their order.
    pub fn create(
        settings: &PdfEngineSettings,
        unoconv: Arc<Unoconv>,
    ) -> Result<MultiPdfEngine, PdfEngineFactoryError> {
        let timeout = Duration::from_secs(settings.process_timeout_seconds);

        let mut engines: Vec<(String, Arc<dyn PdfEngine>)> = Vec::new();
        for name in &settings.engines {
            let name = name.trim().to_lowercase();
            let engine: Arc<dyn PdfEngine> = match name.as_str() {
                "qpdf" => Arc::new(QpdfEngine::new(settings.qpdf_binary.clone(), timeout)),
                "unoconv" => Arc::new(UnoconvPdfEngine::new(Arc::clone(&unoconv))),
                _ => return Err(PdfEngineFactoryError::UnknownEngine(name)),
            };
            tracing::info!(engine = %name, "PDF engine enabled");
            engines.push((name, engine));
        }

        if engines.is_empty() {
            return Err(PdfEngineFactoryError::NoEngines);
        }

        Ok(MultiPdfEngine::new(engines))
    }
}
