use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use crate::application::scope::{Cancellation, RequestScope};

use super::error::ApiError;

const UPLOADS_DIR: &str = "uploads";

/// Writes the multipart files into `working_dir` and collects the other parts as
/// form values.
pub(super) async fn read_request_scope(
    mut multipart: Multipart,
    working_dir: &Path,
    cancellation: Cancellation,
) -> Result<RequestScope, ApiError> {
    let uploads_dir = working_dir.join(UPLOADS_DIR);
    tokio::fs::create_dir_all(&uploads_dir)
        .await
        .map_err(ApiError::internal)?;

    let mut scope = RequestScope::new(working_dir).with_cancellation(cancellation);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(String::from);

        match file_name {
            Some(file_name) => {
                let Some(path) = upload_path(&uploads_dir, &file_name) else {
                    tracing::debug!(
                        file_name = %file_name,
                        "Ignoring upload without usable filename"
                    );
                    continue;
                };
                let data = field.bytes().await.map_err(|e| {
                    multipart_error(&format!("Failed to read file '{}'", file_name), e)
                })?;

                tokio::fs::write(&path, &data)
                    .await
                    .map_err(ApiError::internal)?;

                tracing::debug!(file_name = %file_name, bytes = data.len(), "Stored upload");
                scope = scope.with_file(base_name(&file_name), path);
            }
            None if !name.is_empty() => {
                let value = field.text().await.map_err(|e| {
                    multipart_error(&format!("Failed to read form field '{}'", name), e)
                })?;
                scope = scope.with_value(name, value);
            }
            None => continue,
        }
    }

    Ok(scope)
}

/// Keeps the status axum picked for the failure, e.g. 413 past the body limit.
fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    tracing::warn!(error = %error, "{}", context);
    ApiError::with_status(error.status(), format!("{}: {}", context, error.body_text()))
}

/// Last path component of a client supplied filename, so uploads cannot escape
/// the scratch directory.
fn base_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn upload_path(uploads_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let name = base_name(file_name);
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(uploads_dir.join(name))
}
