use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use folio::application::ports::{PdfEngine, PdfEngineError};
use folio::application::scope::Cancellation;
use folio::domain::PdfFormat;
use folio::infrastructure::office::Unoconv;
use folio::infrastructure::pdf_engines::UnoconvPdfEngine;

fn engine() -> UnoconvPdfEngine {
    UnoconvPdfEngine::new(Arc::new(Unoconv::new(
        "/nonexistent/folio/unoconv",
        Duration::from_secs(5),
    )))
}

#[tokio::test]
async fn given_unoconv_engine_when_merging_then_reports_method_not_available() {
    let result = engine()
        .merge(
            &Cancellation::new(),
            &[PathBuf::from("/a.pdf")],
            Path::new("/out.pdf"),
        )
        .await;

    assert!(matches!(result, Err(PdfEngineError::MethodNotAvailable(_))));
}

#[tokio::test]
async fn given_unknown_format_when_converting_then_reports_format_not_available() {
    let result = engine()
        .convert(
            &Cancellation::new(),
            &PdfFormat::Other("foo".to_string()),
            Path::new("/in.pdf"),
            Path::new("/out.pdf"),
        )
        .await;

    assert!(matches!(
        result,
        Err(PdfEngineError::FormatNotAvailable(ref format)) if format == "foo"
    ));
}
