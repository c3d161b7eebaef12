use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use folio::application::ports::{OfficeConverter, OfficeConverterError};
use folio::application::scope::Cancellation;
use folio::domain::{ConvertOptions, PdfFormat};
use folio::infrastructure::office::{
    OFFICE_EXTENSIONS, Unoconv, UnoconvConverter, pdf_args, select_pdf_version,
};

const MISSING_BINARY: &str = "/nonexistent/folio/unoconv";

fn args(options: &ConvertOptions) -> Vec<OsString> {
    pdf_args(Path::new("/in/report.docx"), Path::new("/out/x.pdf"), options).unwrap()
}

fn strings(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[test]
fn given_default_options_when_building_args_then_only_sets_format_and_paths() {
    assert_eq!(
        args(&ConvertOptions::default()),
        strings(&["--format", "pdf", "--output", "/out/x.pdf", "/in/report.docx"])
    );
}

#[test]
fn given_all_options_when_building_args_then_passes_each_to_export_filter() {
    let options = ConvertOptions {
        landscape: true,
        page_ranges: "1-2".to_string(),
        native_pdf_format: Some(PdfFormat::PdfA3b),
    };

    assert_eq!(
        args(&options),
        strings(&[
            "--format",
            "pdf",
            "--printer",
            "PaperOrientation=landscape",
            "--export",
            "PageRange=1-2",
            "--export",
            "SelectPdfVersion=3",
            "--output",
            "/out/x.pdf",
            "/in/report.docx",
        ])
    );
}

#[test]
fn given_unknown_native_format_when_building_args_then_reports_format_not_available() {
    let options = ConvertOptions {
        native_pdf_format: Some(PdfFormat::Other("PDF/A-4".to_string())),
        ..ConvertOptions::default()
    };

    let result = pdf_args(Path::new("/in.docx"), Path::new("/out.pdf"), &options);

    assert!(matches!(
        result,
        Err(OfficeConverterError::PdfFormatNotAvailable(ref format)) if format == "PDF/A-4"
    ));
}

#[test]
fn given_known_formats_when_selecting_pdf_version_then_maps_to_export_filter_values() {
    assert_eq!(select_pdf_version(&PdfFormat::PdfA1a), Some(1));
    assert_eq!(select_pdf_version(&PdfFormat::PdfA2b), Some(2));
    assert_eq!(select_pdf_version(&PdfFormat::PdfA3b), Some(3));
    assert_eq!(select_pdf_version(&PdfFormat::Other("x".to_string())), None);
}

#[tokio::test]
async fn given_malformed_page_ranges_when_converting_then_fails_without_running_unoconv() {
    let unoconv = Unoconv::new(MISSING_BINARY, Duration::from_secs(5));
    let options = ConvertOptions {
        page_ranges: "foo".to_string(),
        ..ConvertOptions::default()
    };

    let result = unoconv
        .pdf(
            &Cancellation::new(),
            Path::new("/in.docx"),
            Path::new("/out.pdf"),
            &options,
        )
        .await;

    assert!(matches!(
        result,
        Err(OfficeConverterError::MalformedPageRanges(ref ranges)) if ranges == "foo"
    ));
}

#[tokio::test]
async fn given_missing_binary_when_converting_then_reports_conversion_failure() {
    let unoconv = Unoconv::new(MISSING_BINARY, Duration::from_secs(5));

    let result = unoconv
        .pdf(
            &Cancellation::new(),
            Path::new("/in.docx"),
            Path::new("/out.pdf"),
            &ConvertOptions::default(),
        )
        .await;

    assert!(matches!(result, Err(OfficeConverterError::ConversionFailed(_))));
}

#[tokio::test]
async fn given_cancelled_request_when_converting_then_reports_cancelled() {
    let unoconv = Unoconv::new(MISSING_BINARY, Duration::from_secs(5));
    let cancellation = Cancellation::new();
    cancellation.cancel();

    let result = unoconv
        .pdf(
            &cancellation,
            Path::new("/in.docx"),
            Path::new("/out.pdf"),
            &ConvertOptions::default(),
        )
        .await;

    assert!(matches!(result, Err(OfficeConverterError::Cancelled)));
}

#[test]
fn given_unoconv_converter_when_listing_extensions_then_accepts_office_documents() {
    let converter = UnoconvConverter::new(Arc::new(Unoconv::new(
        MISSING_BINARY,
        Duration::from_secs(5),
    )));

    let extensions = converter.extensions();
    assert_eq!(extensions.len(), OFFICE_EXTENSIONS.len());
    for ext in [".docx", ".odt", ".xlsx", ".pptx"] {
        assert!(extensions.iter().any(|e| e == ext), "missing {ext}");
    }
}
