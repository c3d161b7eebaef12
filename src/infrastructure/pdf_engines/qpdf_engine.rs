use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{PdfEngine, PdfEngineError};
use crate::application::scope::Cancellation;
use crate::domain::PdfFormat;
use crate::infrastructure::process::{ProcessError, run_command};

/// Merges PDFs with the `qpdf` command line tool.
pub struct QpdfEngine {
    binary: String,
    timeout: Duration,
}

impl QpdfEngine {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

/// `qpdf --empty --pages <inputs...> -- <output>`
pub fn merge_args(input_paths: &[PathBuf], output_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--empty".into(), "--pages".into()];
    args.extend(input_paths.iter().map(|path| path.as_os_str().to_owned()));
    args.push("--".into());
    args.push(output_path.as_os_str().to_owned());
    args
}

#[async_trait]
impl PdfEngine for QpdfEngine {
    async fn merge(
        &self,
        cancellation: &Cancellation,
        input_paths: &[PathBuf],
        output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        let args = merge_args(input_paths, output_path);

        tracing::debug!(inputs = input_paths.len(), "Merging PDFs with qpdf");

        run_command(&self.binary, &args, cancellation, self.timeout)
            .await
            .map_err(|e| match e {
                ProcessError::Cancelled { .. } => PdfEngineError::Cancelled,
                e => PdfEngineError::MergeFailed(e.to_string()),
            })
    }

    async fn convert(
        &self,
        _cancellation: &Cancellation,
        _format: &PdfFormat,
        _input_path: &Path,
        _output_path: &Path,
    ) -> Result<(), PdfEngineError> {
        Err(PdfEngineError::MethodNotAvailable("convert"))
    }
}
