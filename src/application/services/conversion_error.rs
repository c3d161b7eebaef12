use crate::application::ports::{OfficeConverterError, PdfEngineError};
use crate::application::scope::ScopeError;
use crate::domain::PdfFormat;

use super::stage::Stage;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("missing at least one mandatory file (accepted extensions: {})", .0.join(", "))]
    MissingMandatoryFile(Vec<String>),
    #[error("form field '{field}' is invalid (got '{value}', expected {expected})")]
    InvalidFormField {
        field: String,
        value: String,
        expected: &'static str,
    },
    #[error("conflicting native PDF formats: {0}")]
    ConflictingNativeFormats(String),
    #[error("malformed page ranges '{0}'")]
    MalformedPageRanges(String),
    #[error("unsupported PDF format '{format}'")]
    PdfFormatNotAvailable { format: String, stage: Stage },
    #[error("request cancelled before {0} stage")]
    Cancelled(Stage),
    #[error("convert '{filename}' to PDF: {source}")]
    Converter {
        filename: String,
        #[source]
        source: OfficeConverterError,
    },
    #[error("merge PDFs: {0}")]
    Merge(#[source] PdfEngineError),
    #[error("convert PDF to '{format}': {source}")]
    Format {
        format: PdfFormat,
        #[source]
        source: PdfEngineError,
    },
    #[error("register outputs: {0}")]
    Registration(#[from] ScopeError),
}

/// Who is to blame for a failed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    /// The client sent something unusable; the message is safe to return.
    User(String),
    /// Anything else. Details stay in the logs.
    Backend,
}

impl ConversionError {
    pub fn classify(&self) -> ErrorClass {
        match self {
            ConversionError::MissingMandatoryFile(_)
            | ConversionError::InvalidFormField { .. }
            | ConversionError::ConflictingNativeFormats(_)
            | ConversionError::MalformedPageRanges(_)
            | ConversionError::PdfFormatNotAvailable { .. } => ErrorClass::User(self.to_string()),
            ConversionError::Cancelled(_)
            | ConversionError::Converter { .. }
            | ConversionError::Merge(_)
            | ConversionError::Format { .. }
            | ConversionError::Registration(_) => ErrorClass::Backend,
        }
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self.classify(), ErrorClass::User(_))
    }

    /// Pipeline stage the error left from.
    pub fn stage(&self) -> Stage {
        match self {
            ConversionError::MissingMandatoryFile(_)
            | ConversionError::InvalidFormField { .. }
            | ConversionError::ConflictingNativeFormats(_) => Stage::Bind,
            ConversionError::MalformedPageRanges(_) | ConversionError::Converter { .. } => {
                Stage::PerFile
            }
            ConversionError::Merge(_) => Stage::Merge,
            ConversionError::Format { .. } => Stage::Format,
            ConversionError::PdfFormatNotAvailable { stage, .. } | ConversionError::Cancelled(stage) => {
                *stage
            }
            ConversionError::Registration(_) => Stage::Register,
        }
    }
}
