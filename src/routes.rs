use std::{path::Path, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{error, info};

use crate::{
    config::Config,
    error::{AppError, Result},
    separator::StemSeparator,
    storage::FileStorage,
    types::{HealthResponse, SeparateResponse, Stem},
};

/// Upload extensions accepted by `/api/separate`.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["mp3", "wav", "m4a", "aac", "ogg", "flac"];

/// Services shared across requests, constructed once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<FileStorage>,
    pub separator: Arc<dyn StemSeparator>,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/separate", post(separate))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        port: state.config.port,
        host: state.config.host.clone(),
        frontend_url: state.config.frontend_url.clone(),
    })
}

/// Saves the upload, runs separation, encodes the stems. The upload file
/// and the scratch directory are removed before the response is sent, on
/// success and on failure alike.
async fn separate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SeparateResponse>> {
    let (filename, data) = read_upload(multipart).await?;

    let ext = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Invalid file type. Allowed types: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    let input_path = state.storage.save_upload(&filename, &data).await?;
    info!(filename = %filename, path = %input_path.display(), "saved upload");

    let output_dir = match state.storage.create_temp_dir() {
        Ok(dir) => dir,
        Err(e) => {
            state.storage.cleanup(&[input_path]).await;
            return Err(e);
        }
    };

    let result = run_separation(&state, &input_path, &output_dir).await;
    state.storage.cleanup(&[input_path, output_dir]).await;

    match result {
        Ok(stems) => Ok(Json(SeparateResponse { stems })),
        Err(e) => {
            error!(filename = %filename, error = %e, "separation request failed");
            Err(e)
        }
    }
}

async fn run_separation(
    state: &AppState,
    input_path: &Path,
    output_dir: &Path,
) -> Result<Vec<Stem>> {
    let stem_paths = state.separator.separate(input_path, output_dir).await?;

    let mut stems = Vec::with_capacity(stem_paths.len());
    for path in &stem_paths {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        stems.push(Stem {
            name,
            data: BASE64.encode(bytes),
        });
    }

    Ok(stems)
}

/// Pulls the `file` field out of the multipart body. Missing field or
/// missing filename is a client error.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Bytes)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_owned) else {
            return Err(AppError::BadRequest("No file provided".to_string()));
        };
        let data = field.bytes().await?;
        return Ok((filename, data));
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}
