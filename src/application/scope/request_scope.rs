use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Span;
use uuid::Uuid;

use crate::domain::{Artifact, UploadedFile};

use super::cancellation::Cancellation;

/// Everything one conversion request owns: its uploads, form values, scratch
/// directory, cancellation signal, span and the outputs handed back to the client.
#[derive(Debug)]
pub struct RequestScope {
    working_dir: PathBuf,
    files: Vec<UploadedFile>,
    form_values: HashMap<String, Vec<String>>,
    cancellation: Cancellation,
    span: Span,
    output_paths: Mutex<Vec<Artifact>>,
}

impl RequestScope {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            files: Vec::new(),
            form_values: HashMap::new(),
            cancellation: Cancellation::new(),
            span: Span::current(),
            output_paths: Mutex::new(Vec::new()),
        }
    }

    /// Adds an uploaded file. A later upload with the same filename replaces the earlier one.
    pub fn with_file(mut self, filename: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let file = UploadedFile::new(filename, path);
        match self.files.iter_mut().find(|f| f.filename == file.filename) {
            Some(existing) => *existing = file,
            None => self.files.push(file),
        }
        self
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.form_values
            .entry(field.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Uploaded files in upload order.
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn form_values(&self) -> &HashMap<String, Vec<String>> {
        &self.form_values
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn cancellation(&self) -> &Cancellation {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// A fresh, never reused path inside the scratch directory. `ext` includes the dot.
    pub fn generate_path(&self, ext: &str) -> PathBuf {
        self.working_dir.join(format!("{}{}", Uuid::new_v4(), ext))
    }

    /// Registers the artifacts to return to the client, all of them or none.
    pub fn add_output_paths(&self, artifacts: &[Artifact]) -> Result<(), ScopeError> {
        if self.is_cancelled() {
            return Err(ScopeError::Cancelled);
        }

        if let Some(foreign) = artifacts
            .iter()
            .find(|artifact| !artifact.path().starts_with(&self.working_dir))
        {
            return Err(ScopeError::ForeignPath(foreign.path().to_path_buf()));
        }

        self.output_paths
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(artifacts);

        Ok(())
    }

    pub fn output_paths(&self) -> Vec<Artifact> {
        self.output_paths
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("request cancelled")]
    Cancelled,
    #[error("path not produced within the request scope: {}", .0.display())]
    ForeignPath(PathBuf),
}
