use std::collections::HashSet;
use std::io::{Cursor, Write};

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::domain::Artifact;

use super::error::ApiError;

/// One artifact is sent as a PDF, several as a zip archive of PDFs.
pub(super) async fn artifacts_response(
    artifacts: &[Artifact],
    basename: &str,
) -> Result<Response, ApiError> {
    match artifacts {
        [] => Err(ApiError::internal("conversion produced no output")),
        [artifact] => {
            let data = tokio::fs::read(artifact.path())
                .await
                .map_err(ApiError::internal)?;
            Ok(attachment(data, "application/pdf", &format!("{basename}.pdf")))
        }
        many => {
            let mut entries = Vec::with_capacity(many.len());
            for (name, artifact) in unique_names(many).into_iter().zip(many) {
                let data = tokio::fs::read(artifact.path())
                    .await
                    .map_err(ApiError::internal)?;
                entries.push((name, data));
            }

            let archive = tokio::task::spawn_blocking(move || zip_entries(entries))
                .await
                .map_err(ApiError::internal)?
                .map_err(ApiError::internal)?;

            Ok(attachment(archive, "application/zip", &format!("{basename}.zip")))
        }
    }
}

fn attachment(data: Vec<u8>, content_type: &'static str, filename: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        data,
    )
        .into_response()
}

/// Artifact names with duplicates suffixed, e.g. `report.pdf` and `report_2.pdf`.
/// A suffix is only used once no other entry holds that name.
fn unique_names(artifacts: &[Artifact]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();

    artifacts
        .iter()
        .map(|artifact| {
            let name = artifact.name();
            let (stem, ext) = match name.rsplit_once('.') {
                Some((stem, ext)) => (stem, Some(ext)),
                None => (name, None),
            };

            let mut candidate = name.to_string();
            let mut counter = 1;
            while taken.contains(&candidate) {
                counter += 1;
                candidate = match ext {
                    Some(ext) => format!("{stem}_{counter}.{ext}"),
                    None => format!("{stem}_{counter}"),
                };
            }

            taken.insert(candidate.clone());
            candidate
        })
        .collect()
}

fn zip_entries(entries: Vec<(String, Vec<u8>)>) -> Result<Vec<u8>, zip::result::ZipError> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, data) in entries {
        writer.start_file(name, options)?;
        writer.write_all(&data)?;
    }

    Ok(writer.finish()?.into_inner())
}
