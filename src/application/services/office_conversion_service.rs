use std::path::PathBuf;
use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{
    OfficeConverter, OfficeConverterError, PdfEngine, PdfEngineError,
};
use crate::application::scope::RequestScope;
use crate::domain::{Artifact, ConvertOptions, PdfFormat, UploadedFile};

use super::conversion_error::{ConversionError, ErrorClass};
use super::form_binding;
use super::stage::Stage;

const MERGED_ARTIFACT_NAME: &str = "merged.pdf";

/// Turns the office documents of a request into PDFs.
///
/// Runs bind, per-file conversion, an optional merge, an optional archival format
/// conversion and finally registers the results on the request scope. Every stage
/// is a public method so it can be driven on its own.
pub struct OfficeConversionService<O, P>
where
    O: OfficeConverter,
    P: PdfEngine,
{
    converter: Arc<O>,
    engine: Arc<P>,
}

impl<O, P> OfficeConversionService<O, P>
where
    O: OfficeConverter,
    P: PdfEngine,
{
    pub fn new(converter: Arc<O>, engine: Arc<P>) -> Self {
        Self { converter, engine }
    }

    pub fn extensions(&self) -> &[String] {
        self.converter.extensions()
    }

    /// Runs the whole pipeline inside the scope's span and returns the registered
    /// artifacts. On error nothing is registered.
    pub async fn convert(&self, scope: &RequestScope) -> Result<Vec<Artifact>, ConversionError> {
        let span = scope.span().clone();
        let result = self.run(scope).instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(artifacts) => {
                tracing::info!(outputs = artifacts.len(), "Office conversion completed");
            }
            Err(e) => match e.classify() {
                ErrorClass::User(message) => {
                    tracing::warn!(
                        stage = %e.stage(),
                        error = %message,
                        "Office conversion rejected"
                    );
                }
                ErrorClass::Backend => {
                    tracing::error!(stage = %e.stage(), error = %e, "Office conversion failed");
                }
            },
        });

        result
    }

    async fn run(&self, scope: &RequestScope) -> Result<Vec<Artifact>, ConversionError> {
        tracing::debug!(stage = %Stage::Bind, files = scope.files().len(), "Entering stage");
        let request = form_binding::bind(scope, self.converter.extensions())?;

        ensure_active(scope, Stage::PerFile)?;
        let mut artifacts = self
            .convert_each(scope, &request.files, &request.options)
            .await?;

        if request.should_merge() {
            ensure_active(scope, Stage::Merge)?;
            artifacts = vec![self.merge(scope, &artifacts).await?];
        }

        if let Some(format) = &request.pdf_format {
            ensure_active(scope, Stage::Format)?;
            artifacts = self.apply_format(scope, format, artifacts).await?;
        }

        tracing::debug!(
            stage = %Stage::Register,
            outputs = artifacts.len(),
            "Entering stage"
        );
        self.register(scope, artifacts)
    }

    /// Converts each file, in order, into its own PDF. The first failure stops the stage.
    pub async fn convert_each(
        &self,
        scope: &RequestScope,
        files: &[UploadedFile],
        options: &ConvertOptions,
    ) -> Result<Vec<Artifact>, ConversionError> {
        tracing::debug!(stage = %Stage::PerFile, files = files.len(), "Entering stage");

        let mut artifacts = Vec::with_capacity(files.len());
        for file in files {
            let output_path = scope.generate_path(".pdf");

            self.converter
                .pdf(scope.cancellation(), &file.path, &output_path, options)
                .await
                .map_err(|source| match source {
                    OfficeConverterError::MalformedPageRanges(ranges) => {
                        ConversionError::MalformedPageRanges(ranges)
                    }
                    OfficeConverterError::PdfFormatNotAvailable(format) => {
                        ConversionError::PdfFormatNotAvailable {
                            format,
                            stage: Stage::PerFile,
                        }
                    }
                    source => ConversionError::Converter {
                        filename: file.filename.clone(),
                        source,
                    },
                })?;

            tracing::debug!(filename = %file.filename, "Converted office document");
            artifacts.push(
                Artifact::new(output_path, file.pdf_name())
                    .with_format(options.native_pdf_format.clone()),
            );
        }

        Ok(artifacts)
    }

    /// Concatenates the artifacts, in order, into a single PDF.
    pub async fn merge(
        &self,
        scope: &RequestScope,
        artifacts: &[Artifact],
    ) -> Result<Artifact, ConversionError> {
        tracing::debug!(stage = %Stage::Merge, inputs = artifacts.len(), "Entering stage");

        let input_paths: Vec<PathBuf> = artifacts
            .iter()
            .map(|artifact| artifact.path().to_path_buf())
            .collect();
        let output_path = scope.generate_path(".pdf");

        self.engine
            .merge(scope.cancellation(), &input_paths, &output_path)
            .await
            .map_err(ConversionError::Merge)?;

        Ok(Artifact::new(output_path, MERGED_ARTIFACT_NAME))
    }

    /// Converts each artifact to `format`. Artifacts already produced in that
    /// format are passed through untouched.
    pub async fn apply_format(
        &self,
        scope: &RequestScope,
        format: &PdfFormat,
        artifacts: Vec<Artifact>,
    ) -> Result<Vec<Artifact>, ConversionError> {
        tracing::debug!(
            stage = %Stage::Format,
            format = %format,
            inputs = artifacts.len(),
            "Entering stage"
        );

        let mut converted = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            if artifact.is_in_format(format) {
                tracing::debug!(
                    name = %artifact.name(),
                    format = %format,
                    "Already in requested format"
                );
                converted.push(artifact);
                continue;
            }

            let output_path = scope.generate_path(".pdf");
            self.engine
                .convert(scope.cancellation(), format, artifact.path(), &output_path)
                .await
                .map_err(|source| match source {
                    PdfEngineError::FormatNotAvailable(_) => {
                        ConversionError::PdfFormatNotAvailable {
                            format: format.to_string(),
                            stage: Stage::Format,
                        }
                    }
                    source => ConversionError::Format {
                        format: format.clone(),
                        source,
                    },
                })?;

            converted.push(
                Artifact::new(output_path, artifact.name()).with_format(Some(format.clone())),
            );
        }

        Ok(converted)
    }

    /// Hands the final artifacts to the scope, all at once.
    pub fn register(
        &self,
        scope: &RequestScope,
        artifacts: Vec<Artifact>,
    ) -> Result<Vec<Artifact>, ConversionError> {
        scope.add_output_paths(&artifacts)?;
        Ok(artifacts)
    }
}

fn ensure_active(scope: &RequestScope, next: Stage) -> Result<(), ConversionError> {
    if scope.is_cancelled() {
        return Err(ConversionError::Cancelled(next));
    }
    Ok(())
}
