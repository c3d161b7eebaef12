use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::application::ports::OfficeConverterError;
use crate::application::scope::Cancellation;
use crate::domain::{ConvertOptions, PdfFormat, is_valid_page_ranges};
use crate::infrastructure::process::{ProcessError, run_command};

/// unoconv reports an unparsable `PageRange` export option with this exit code.
const MALFORMED_PAGE_RANGES_EXIT_CODE: i32 = 5;

/// Drives the office suite through the `unoconv` command line.
///
/// The office suite cannot run two conversions side by side, so calls queue on an
/// internal lock. Share one instance (behind an `Arc`) between every adapter that
/// needs it.
pub struct Unoconv {
    binary: String,
    timeout: Duration,
    lock: Mutex<()>,
}

impl Unoconv {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
            lock: Mutex::new(()),
        }
    }

    pub async fn pdf(
        &self,
        cancellation: &Cancellation,
        input_path: &Path,
        output_path: &Path,
        options: &ConvertOptions,
    ) -> Result<(), OfficeConverterError> {
        if !is_valid_page_ranges(&options.page_ranges) {
            return Err(OfficeConverterError::MalformedPageRanges(
                options.page_ranges.clone(),
            ));
        }

        let args = pdf_args(input_path, output_path, options)?;

        let _guard = tokio::select! {
            guard = self.lock.lock() => guard,
            _ = cancellation.cancelled() => return Err(OfficeConverterError::Cancelled),
        };

        tracing::debug!(
            input = %input_path.display(),
            landscape = options.landscape,
            page_ranges = %options.page_ranges,
            native_pdf_format = ?options.native_pdf_format,
            "Running unoconv"
        );

        run_command(&self.binary, &args, cancellation, self.timeout)
            .await
            .map_err(|e| match e {
                ProcessError::Cancelled { .. } => OfficeConverterError::Cancelled,
                e if e.exit_code() == Some(MALFORMED_PAGE_RANGES_EXIT_CODE)
                    && !options.page_ranges.is_empty() =>
                {
                    OfficeConverterError::MalformedPageRanges(options.page_ranges.clone())
                }
                e => OfficeConverterError::ConversionFailed(e.to_string()),
            })
    }
}

/// `SelectPdfVersion` value of the office suite's PDF export filter.
pub fn select_pdf_version(format: &PdfFormat) -> Option<u8> {
    match format {
        PdfFormat::PdfA1a => Some(1),
        PdfFormat::PdfA2b => Some(2),
        PdfFormat::PdfA3b => Some(3),
        PdfFormat::Other(_) => None,
    }
}

/// Command line for converting `input_path` into a PDF at `output_path`.
pub fn pdf_args(
    input_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<Vec<OsString>, OfficeConverterError> {
    let mut args: Vec<OsString> = vec!["--format".into(), "pdf".into()];

    if options.landscape {
        args.push("--printer".into());
        args.push("PaperOrientation=landscape".into());
    }

    if !options.page_ranges.is_empty() {
        args.push("--export".into());
        args.push(format!("PageRange={}", options.page_ranges.trim()).into());
    }

    if let Some(format) = &options.native_pdf_format {
        let version = select_pdf_version(format)
            .ok_or_else(|| OfficeConverterError::PdfFormatNotAvailable(format.to_string()))?;
        args.push("--export".into());
        args.push(format!("SelectPdfVersion={version}").into());
    }

    args.push("--output".into());
    args.push(output_path.as_os_str().to_owned());
    args.push(input_path.as_os_str().to_owned());

    Ok(args)
}
