use super::pdf_format::PdfFormat;

/// Options forwarded to the office converter for every input file of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub landscape: bool,
    /// Page selection such as `1-3,5`. Empty means every page.
    pub page_ranges: String,
    /// Archival format the converter should emit directly.
    pub native_pdf_format: Option<PdfFormat>,
}
