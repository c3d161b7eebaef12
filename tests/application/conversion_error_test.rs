use folio::application::ports::{OfficeConverterError, PdfEngineError};
use folio::application::scope::ScopeError;
use folio::application::services::{ConversionError, ErrorClass, Stage};
use folio::domain::PdfFormat;

fn user_errors() -> Vec<ConversionError> {
    vec![
        ConversionError::MissingMandatoryFile(vec![".docx".to_string()]),
        ConversionError::InvalidFormField {
            field: "merge".to_string(),
            value: "x".to_string(),
            expected: "true or false",
        },
        ConversionError::ConflictingNativeFormats("a and b".to_string()),
        ConversionError::MalformedPageRanges("foo".to_string()),
        ConversionError::PdfFormatNotAvailable {
            format: "foo".to_string(),
            stage: Stage::Format,
        },
    ]
}

fn backend_errors() -> Vec<ConversionError> {
    vec![
        ConversionError::Cancelled(Stage::Merge),
        ConversionError::Converter {
            filename: "a.docx".to_string(),
            source: OfficeConverterError::ConversionFailed("crash".to_string()),
        },
        ConversionError::Merge(PdfEngineError::MergeFailed("crash".to_string())),
        ConversionError::Format {
            format: PdfFormat::PdfA1a,
            source: PdfEngineError::ConversionFailed("crash".to_string()),
        },
        ConversionError::Registration(ScopeError::Cancelled),
    ]
}

#[test]
fn given_client_caused_errors_when_classifying_then_they_are_user_errors_with_message() {
    for error in user_errors() {
        assert_eq!(error.classify(), ErrorClass::User(error.to_string()));
        assert!(error.is_user_error());
    }
}

#[test]
fn given_internal_errors_when_classifying_then_they_are_backend_errors() {
    for error in backend_errors() {
        assert_eq!(error.classify(), ErrorClass::Backend, "{error:?}");
        assert!(!error.is_user_error());
    }
}

#[test]
fn given_errors_when_asking_stage_then_reports_where_they_left_the_pipeline() {
    assert_eq!(
        ConversionError::MissingMandatoryFile(Vec::new()).stage(),
        Stage::Bind
    );
    assert_eq!(
        ConversionError::MalformedPageRanges("x".to_string()).stage(),
        Stage::PerFile
    );
    assert_eq!(
        ConversionError::PdfFormatNotAvailable {
            format: "foo".to_string(),
            stage: Stage::PerFile,
        }
        .stage(),
        Stage::PerFile
    );
    assert_eq!(
        ConversionError::Registration(ScopeError::Cancelled).stage(),
        Stage::Register
    );
}

#[test]
fn given_unavailable_format_when_displayed_then_names_the_format() {
    let error = ConversionError::PdfFormatNotAvailable {
        format: "foo".to_string(),
        stage: Stage::Format,
    };

    assert_eq!(error.to_string(), "unsupported PDF format 'foo'");
}
