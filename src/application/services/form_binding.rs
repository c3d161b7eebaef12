use std::collections::HashMap;

use crate::application::scope::RequestScope;
use crate::domain::{ConvertOptions, PdfFormat, UploadedFile};

use super::conversion_error::ConversionError;

pub const FIELD_LANDSCAPE: &str = "landscape";
pub const FIELD_PAGE_RANGES: &str = "pageRanges";
pub const FIELD_NATIVE_PDF_FORMAT: &str = "nativePdfFormat";
pub const FIELD_PDF_FORMAT: &str = "pdfFormat";
pub const FIELD_MERGE: &str = "merge";

/// Every form field the office route reads. Shortcut flags such as
/// `nativePdfA1aFormat` come from [`PdfFormat::native_shortcut_field`].
pub fn recognized_fields() -> Vec<&'static str> {
    let mut fields = vec![
        FIELD_LANDSCAPE,
        FIELD_PAGE_RANGES,
        FIELD_NATIVE_PDF_FORMAT,
        FIELD_PDF_FORMAT,
        FIELD_MERGE,
    ];
    fields.extend(
        PdfFormat::KNOWN
            .iter()
            .filter_map(PdfFormat::native_shortcut_field),
    );
    fields
}

/// Inputs of one office conversion, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeRequest {
    pub files: Vec<UploadedFile>,
    pub options: ConvertOptions,
    pub merge: bool,
    pub pdf_format: Option<PdfFormat>,
}

impl OfficeRequest {
    /// Merging a single file is a no-op.
    pub fn should_merge(&self) -> bool {
        self.merge && self.files.len() >= 2
    }
}

/// Reads the scope's form values and uploads into an [`OfficeRequest`].
///
/// Uploads whose extension is not in `extensions` are dropped before checking that
/// at least one file remains. Files are sorted by name when merging so the merged
/// document has a stable page order; otherwise upload order is kept.
pub fn bind(
    scope: &RequestScope,
    extensions: &[String],
) -> Result<OfficeRequest, ConversionError> {
    let form = FormReader::new(scope.form_values());

    let landscape = form.bool(FIELD_LANDSCAPE, false)?;
    let page_ranges = form.string(FIELD_PAGE_RANGES);
    let merge = form.bool(FIELD_MERGE, false)?;
    let pdf_format = form.pdf_format(FIELD_PDF_FORMAT);
    let native_pdf_format = resolve_native_format(&form)?;

    let recognized = recognized_fields();
    for field in scope.form_values().keys() {
        if !recognized.contains(&field.as_str()) {
            tracing::debug!(field = %field, "Ignoring unrecognized form field");
        }
    }

    let mut files: Vec<UploadedFile> = scope
        .files()
        .iter()
        .filter(|file| {
            let accepted = file.extension().is_some_and(|ext| {
                extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
            });
            if !accepted {
                tracing::debug!(
                    filename = %file.filename,
                    "Skipping file with unsupported extension"
                );
            }
            accepted
        })
        .cloned()
        .collect();

    if files.is_empty() {
        return Err(ConversionError::MissingMandatoryFile(extensions.to_vec()));
    }

    if merge {
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    Ok(OfficeRequest {
        files,
        options: ConvertOptions {
            landscape,
            page_ranges,
            native_pdf_format,
        },
        merge,
        pdf_format,
    })
}

/// Combines `nativePdfFormat` with the per-format shortcut flags. Agreeing values
/// are fine; two true shortcuts, or a shortcut contradicting `nativePdfFormat`, are not.
fn resolve_native_format(form: &FormReader<'_>) -> Result<Option<PdfFormat>, ConversionError> {
    let explicit = form.pdf_format(FIELD_NATIVE_PDF_FORMAT);

    let mut shortcuts: Vec<(&'static str, PdfFormat)> = Vec::new();
    for format in PdfFormat::KNOWN {
        if let Some(field) = format.native_shortcut_field() {
            if form.bool(field, false)? {
                shortcuts.push((field, format));
            }
        }
    }

    match (explicit, shortcuts.as_slice()) {
        (explicit, []) => Ok(explicit),
        (None, [(_, format)]) => Ok(Some(format.clone())),
        (Some(explicit), [(_, format)]) if explicit == *format => Ok(Some(explicit)),
        (Some(explicit), [(field, _)]) => Err(ConversionError::ConflictingNativeFormats(format!(
            "'{field}' is true but '{FIELD_NATIVE_PDF_FORMAT}' is '{explicit}'"
        ))),
        (_, many) => {
            let fields: Vec<&str> = many.iter().map(|(field, _)| *field).collect();
            Err(ConversionError::ConflictingNativeFormats(format!(
                "at most one of {} may be true",
                fields.join(", ")
            )))
        }
    }
}

struct FormReader<'a> {
    values: &'a HashMap<String, Vec<String>>,
}

impl<'a> FormReader<'a> {
    fn new(values: &'a HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }

    /// First value of `field`, trimmed. Blank counts as absent.
    fn value(&self, field: &str) -> Option<&'a str> {
        self.values
            .get(field)
            .and_then(|values| values.first())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn bool(&self, field: &str, default: bool) -> Result<bool, ConversionError> {
        match self.value(field) {
            None => Ok(default),
            Some(value) if value.eq_ignore_ascii_case("true") || value == "1" => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("false") || value == "0" => Ok(false),
            Some(value) => Err(ConversionError::InvalidFormField {
                field: field.to_string(),
                value: value.to_string(),
                expected: "true or false",
            }),
        }
    }

    fn string(&self, field: &str) -> String {
        self.value(field).unwrap_or_default().to_string()
    }

    fn pdf_format(&self, field: &str) -> Option<PdfFormat> {
        self.value(field).and_then(PdfFormat::parse)
    }
}
