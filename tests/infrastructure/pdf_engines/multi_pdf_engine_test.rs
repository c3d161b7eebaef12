use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use folio::application::ports::{PdfEngine, PdfEngineError};
use folio::application::scope::Cancellation;
use folio::domain::PdfFormat;
use folio::infrastructure::pdf_engines::MultiPdfEngine;

#[derive(Clone, Copy)]
enum Outcome {
    Succeed,
    NotAvailable,
    Fail,
    Cancelled,
}

struct StubEngine {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl StubEngine {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn result(&self, format: Option<&PdfFormat>) -> Result<(), PdfEngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (self.outcome, format) {
            (Outcome::Succeed, _) => Ok(()),
            (Outcome::NotAvailable, Some(format)) => {
                Err(PdfEngineError::FormatNotAvailable(format.to_string()))
            }
            (Outcome::NotAvailable, None) => Err(PdfEngineError::MethodNotAvailable("merge")),
            (Outcome::Fail, Some(_)) => Err(PdfEngineError::ConversionFailed("boom".to_string())),
            (Outcome::Fail, None) => Err(PdfEngineError::MergeFailed("boom".to_string())),
            (Outcome::Cancelled, _) => Err(PdfEngineError::Cancelled),
        }
    }
}

#[async_trait::async_trait]
impl PdfEngine for StubEngine {
    async fn merge(
        &self,
        _cancellation: &Cancellation,
        _input_paths: &[PathBuf],
        _output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        self.result(None)
    }

    async fn convert(
        &self,
        _cancellation: &Cancellation,
        format: &PdfFormat,
        _input_path: &Path,
        _output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        self.result(Some(format))
    }
}

fn multi(engines: &[&Arc<StubEngine>]) -> MultiPdfEngine {
    MultiPdfEngine::new(
        engines
            .iter()
            .enumerate()
            .map(|(i, engine)| {
                let engine: Arc<dyn PdfEngine> = (*engine).clone();
                (format!("stub{i}"), engine)
            })
            .collect(),
    )
}

async fn merge(engine: &MultiPdfEngine) -> Result<(), PdfEngineError> {
    engine
        .merge(
            &Cancellation::new(),
            &[PathBuf::from("/a.pdf"), PathBuf::from("/b.pdf")],
            Path::new("/out.pdf"),
        )
        .await
}

async fn convert(engine: &MultiPdfEngine) -> Result<(), PdfEngineError> {
    engine
        .convert(
            &Cancellation::new(),
            &PdfFormat::PdfA1a,
            Path::new("/in.pdf"),
            Path::new("/out.pdf"),
        )
        .await
}

#[tokio::test]
async fn given_first_engine_cannot_merge_when_merging_then_falls_back_to_next() {
    let first = StubEngine::new(Outcome::NotAvailable);
    let second = StubEngine::new(Outcome::Succeed);

    merge(&multi(&[&first, &second])).await.unwrap();

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
}

#[tokio::test]
async fn given_first_engine_succeeds_when_converting_then_later_engines_are_not_called() {
    let first = StubEngine::new(Outcome::Succeed);
    let second = StubEngine::new(Outcome::Succeed);

    convert(&multi(&[&first, &second])).await.unwrap();

    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn given_no_engine_supports_format_when_converting_then_reports_format_not_available() {
    let first = StubEngine::new(Outcome::NotAvailable);
    let second = StubEngine::new(Outcome::NotAvailable);

    let error = convert(&multi(&[&first, &second])).await.unwrap_err();

    assert!(matches!(error, PdfEngineError::FormatNotAvailable(ref f) if f == "PDF/A-1a"));
}

#[tokio::test]
async fn given_no_engine_can_merge_when_merging_then_reports_method_not_available() {
    let only = StubEngine::new(Outcome::NotAvailable);

    let error = merge(&multi(&[&only])).await.unwrap_err();

    assert!(matches!(error, PdfEngineError::MethodNotAvailable("merge")));
}

#[tokio::test]
async fn given_engine_failure_when_converting_then_reports_failure_after_trying_all() {
    let first = StubEngine::new(Outcome::Fail);
    let second = StubEngine::new(Outcome::NotAvailable);

    let error = convert(&multi(&[&first, &second])).await.unwrap_err();

    assert!(matches!(error, PdfEngineError::ConversionFailed(ref m) if m.contains("stub0")));
    assert_eq!(second.calls(), 1);
}

#[tokio::test]
async fn given_engine_cancelled_when_merging_then_stops_immediately() {
    let first = StubEngine::new(Outcome::Cancelled);
    let second = StubEngine::new(Outcome::Succeed);

    let error = merge(&multi(&[&first, &second])).await.unwrap_err();

    assert!(matches!(error, PdfEngineError::Cancelled));
    assert_eq!(second.calls(), 0);
}
