use std::path::{Path, PathBuf};

/// A file received with the request and already written to scratch storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub path: PathBuf,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
        }
    }

    /// Lower-cased extension including the leading dot, e.g. `.docx`.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
    }

    /// Original filename with its extension swapped for `.pdf`.
    pub fn pdf_name(&self) -> String {
        let stem = Path::new(&self.filename)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("document");
        format!("{stem}.pdf")
    }
}
