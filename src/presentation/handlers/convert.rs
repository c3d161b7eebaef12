use std::time::Duration;

use axum::Extension;
use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::application::ports::{OfficeConverter, PdfEngine};
use crate::application::scope::Cancellation;
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::output::artifacts_response;
use super::upload::read_request_scope;

/// Request header naming the returned file, without extension.
pub const OUTPUT_FILENAME_HEADER: &str = "output-filename";

#[tracing::instrument(skip_all, fields(request_id = %request_id.as_str()))]
pub async fn convert_handler<O, P>(
    State(state): State<AppState<O, P>>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, ApiError>
where
    O: OfficeConverter + 'static,
    P: PdfEngine + 'static,
{
    let scratch = tempfile::Builder::new()
        .prefix("folio-")
        .tempdir_in(&state.settings.scratch.root)
        .map_err(ApiError::internal)?;

    let cancellation = Cancellation::new();
    // Fires if the client goes away and this future is dropped mid-conversion.
    let disconnect_guard = cancellation.drop_guard();
    let _deadline = cancellation.cancel_after(Duration::from_secs(
        state.settings.server.request_timeout_seconds,
    ));

    let scope = read_request_scope(multipart, scratch.path(), cancellation).await?;

    tracing::debug!(
        files = scope.files().len(),
        fields = scope.form_values().len(),
        "Received conversion request"
    );

    let artifacts = state.conversion_service.convert(&scope).await?;

    let basename = output_basename(&headers, &request_id);
    let response = artifacts_response(&artifacts, &basename).await;

    disconnect_guard.disarm();
    response
}

/// Name for the returned file: the `Output-Filename` header if usable, else the request id.
fn output_basename(headers: &HeaderMap, request_id: &RequestId) -> String {
    headers
        .get(OUTPUT_FILENAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .chars()
                .filter(|c| !matches!(c, '"' | '/' | '\\') && !c.is_control())
                .collect::<String>()
        })
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| request_id.as_str().to_string())
}
