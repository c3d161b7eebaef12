use axum::http::StatusCode;
use axum::response::IntoResponse;

use folio::application::ports::{OfficeConverterError, PdfEngineError};
use folio::application::scope::ScopeError;
use folio::application::services::{ConversionError, Stage};
use folio::domain::PdfFormat;
use folio::presentation::handlers::ApiError;

fn client_errors() -> Vec<ConversionError> {
    vec![
        ConversionError::MissingMandatoryFile(vec![".docx".to_string()]),
        ConversionError::InvalidFormField {
            field: "landscape".to_string(),
            value: "maybe".to_string(),
            expected: "true or false",
        },
        ConversionError::ConflictingNativeFormats("two shortcuts".to_string()),
        ConversionError::MalformedPageRanges("foo".to_string()),
        ConversionError::PdfFormatNotAvailable {
            format: "foo".to_string(),
            stage: Stage::PerFile,
        },
    ]
}

fn backend_errors() -> Vec<ConversionError> {
    vec![
        ConversionError::Cancelled(Stage::Format),
        ConversionError::Converter {
            filename: "a.docx".to_string(),
            source: OfficeConverterError::Cancelled,
        },
        ConversionError::Merge(PdfEngineError::MergeFailed("qpdf".to_string())),
        ConversionError::Format {
            format: PdfFormat::PdfA2b,
            source: PdfEngineError::Cancelled,
        },
        ConversionError::Registration(ScopeError::Cancelled),
    ]
}

#[test]
fn given_client_caused_conversion_errors_when_mapped_then_expose_bad_request() {
    for error in client_errors() {
        let message = error.to_string();
        let api_error = ApiError::from(error);

        assert_eq!(api_error.http_status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(api_error.to_string(), message);
    }
}

#[test]
fn given_backend_conversion_errors_when_mapped_then_expose_no_status() {
    for error in backend_errors() {
        let api_error = ApiError::from(error);

        assert_eq!(api_error.http_status(), None);
        assert_eq!(
            api_error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
