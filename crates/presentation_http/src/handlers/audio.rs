//! Voice artifact delivery
//!
//! Streams a previously synthesized artifact by identifier. The identifier
//! is parsed with the strict `ArtifactId` grammar, so anything containing a
//! path separator (or any other traversal attempt) fails the parse and is
//! answered with 404 before the filesystem is touched.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use domain::ArtifactId;
use tokio_util::io::ReaderStream;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Streaming chunk size; large artifacts never load fully into memory
const AUDIO_CHUNK_BYTES: usize = 8192;

/// MIME type of every voice artifact
const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// `GET /audio/{artifact_id}` - stream one voice artifact
#[instrument(skip(state))]
pub async fn serve_audio(
    State(state): State<AppState>,
    Path(artifact_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = ArtifactId::parse(&artifact_id)
        .map_err(|_| ApiError::NotFound(format!("audio artifact {artifact_id}")))?;

    let path = state.audio_dir.join(id.file_name());
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::NotFound(format!("audio artifact {id}")));
        },
        Err(e) => return Err(ApiError::Internal(e.to_string())),
    };

    let metadata = file
        .metadata()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    debug!(artifact = %id, size = metadata.len(), "Serving voice artifact");

    let stream = ReaderStream::with_capacity(file, AUDIO_CHUNK_BYTES);

    Response::builder()
        .header(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, metadata.len())
        .header(header::ACCEPT_RANGES, "bytes")
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", id.file_name()),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
