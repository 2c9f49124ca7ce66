use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::TryStreamExt;
use validator::Validate;

use crate::config::UploadSettings;
use crate::core::NavtexParser;
use crate::models::{ApiResponse, HealthResponse, ParsedNavtex, UploadedFile};
use crate::routes::error::ApiError;

/// Multipart field carrying the NAVTEX capture
const FILE_FIELD: &str = "file";

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub parser: NavtexParser,
    pub upload: UploadSettings,
}

impl AppState {
    pub fn new(upload: UploadSettings) -> Self {
        Self {
            parser: NavtexParser::new(),
            upload,
        }
    }
}

/// Configure all NAVTEX routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/navtex/parse", web::post().to(parse_navtex));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Parse an uploaded NAVTEX capture
///
/// POST /api/v1/navtex/parse
///
/// `multipart/form-data` with a `file` field holding a `.txt` capture.
/// Response body:
/// ```json
/// {
///   "message": "Success",
///   "content": { "validMessage": "string", "coordinates": ["string"] }
/// }
/// ```
async fn parse_navtex(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let request_id = uuid::Uuid::new_v4();

    let result = handle_upload(&state, payload).await;
    match &result {
        Ok(parsed) => tracing::info!(
            %request_id,
            coordinates = parsed.coordinates.len(),
            "Parsed NAVTEX upload"
        ),
        Err(e) => tracing::error!(%request_id, error = %e, "Failed to process NAVTEX upload"),
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(result?)))
}

async fn handle_upload(
    state: &AppState,
    payload: Multipart,
) -> Result<ParsedNavtex, ApiError> {
    let upload = read_upload(payload, state.upload.max_file_bytes)
        .await?
        .ok_or_else(|| ApiError::InvalidUpload("Invalid File Uploaded!".to_string()))?;

    if let Err(errors) = upload.validate() {
        tracing::info!("Upload validation failed: {}", errors);
        return Err(ApiError::InvalidUpload("Invalid File Uploaded!".to_string()));
    }

    if !upload.has_extension(&state.upload.allowed_extension) {
        return Err(ApiError::InvalidUpload(format!(
            "Only .{} files are allowed.",
            state.upload.allowed_extension
        )));
    }

    tracing::debug!(
        "Received {} ({} bytes)",
        upload.file_name,
        upload.content.len()
    );

    let text = upload.decode_text();
    Ok(state.parser.process(&text)?)
}

/// Read the `file` field of a multipart body, enforcing the size limit
///
/// Other fields are drained and ignored. Returns `None` when no `file` field
/// was sent.
async fn read_upload(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Option<UploadedFile>, ApiError> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await? {
        if upload.is_some() || field.name() != Some(FILE_FIELD) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let mut content = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if content.len() + chunk.len() > max_bytes {
                return Err(ApiError::PayloadTooLarge { limit: max_bytes });
            }
            content.extend_from_slice(&chunk);
        }

        upload = Some(UploadedFile::new(file_name, content));
    }

    Ok(upload)
}
