//! File upload pass-through probe.
//!
//! Buffers the whole `file` multipart part in memory and echoes its
//! metadata. No size limit is enforced; unbounded memory use is an accepted
//! limitation of a test tool, and the server disables the default body limit
//! so large-payload proxy buffering can be exercised.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub msg: &'static str,
    #[serde(rename = "파일명")]
    pub filename: Option<String>,
    #[serde(rename = "크기")]
    pub size: String,
    #[serde(rename = "타입")]
    pub content_type: Option<String>,
}

/// `POST /upload` — multipart form with a `file` part.
///
/// A request without the part is a validation failure (4xx), not a probe
/// result.
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (e.status(), e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (e.status(), e.to_string()))?;

        tracing::debug!(
            filename = filename.as_deref().unwrap_or("<unnamed>"),
            size = bytes.len(),
            "Upload probe received file"
        );

        return Ok(Json(UploadResponse {
            msg: "파일 업로드 성공",
            filename,
            size: format!("{} bytes", bytes.len()),
            content_type,
        }));
    }

    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("missing multipart field {:?}", UPLOAD_FIELD),
    ))
}
