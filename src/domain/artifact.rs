use std::path::{Path, PathBuf};

use super::pdf_format::PdfFormat;

/// A PDF produced during a request, living on the request's scratch volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    name: String,
    format: Option<PdfFormat>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: Option<PdfFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name presented to the client for this artifact.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Archival format the artifact already conforms to, if any.
    pub fn format(&self) -> Option<&PdfFormat> {
        self.format.as_ref()
    }

    pub fn is_in_format(&self, format: &PdfFormat) -> bool {
        self.format.as_ref() == Some(format)
    }
}
