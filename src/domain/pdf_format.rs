use std::fmt;

/// Archival PDF sub-format requested for an output.
///
/// Identifiers outside the known PDF/A set are kept verbatim so the backend that
/// receives them decides whether it can honour them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PdfFormat {
    PdfA1a,
    PdfA2b,
    PdfA3b,
    Other(String),
}

impl PdfFormat {
    pub const KNOWN: [PdfFormat; 3] = [PdfFormat::PdfA1a, PdfFormat::PdfA2b, PdfFormat::PdfA3b];

    /// Parses a form value. An empty (or blank) value means no format was requested.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let format = Self::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_else(|| PdfFormat::Other(value.to_string()));

        Some(format)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PdfFormat::PdfA1a => "PDF/A-1a",
            PdfFormat::PdfA2b => "PDF/A-2b",
            PdfFormat::PdfA3b => "PDF/A-3b",
            PdfFormat::Other(value) => value,
        }
    }

    /// Name of the boolean form field that selects this format natively,
    /// e.g. `nativePdfA1aFormat`.
    pub fn native_shortcut_field(&self) -> Option<&'static str> {
        match self {
            PdfFormat::PdfA1a => Some("nativePdfA1aFormat"),
            PdfFormat::PdfA2b => Some("nativePdfA2bFormat"),
            PdfFormat::PdfA3b => Some("nativePdfA3bFormat"),
            PdfFormat::Other(_) => None,
        }
    }
}

impl fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
