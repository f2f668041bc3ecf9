use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use dataguard_core::{CleanError, MediaKind, SanitizationEngine};

use crate::api::models::{ErrorResponse, FileQuery, HealthStatus, ScrubTextRequest, ScrubTextResponse, ServiceInfo};
use crate::api::AppState;

const SERVICE_NAME: &str = "DataGuard";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const FALLBACK_FILENAME: &str = "cleaned_file";

/// Failures surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Empty file uploaded")]
    EmptyUpload,

    #[error(transparent)]
    Clean(#[from] CleanError),

    #[error("File cleaning failed: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyUpload | ApiError::Clean(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Liveness probe
pub async fn health_check() -> impl Responder {
    debug!("Health check requested");
    HttpResponse::Ok().json(HealthStatus {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
    })
}

/// Service information and endpoint map
pub async fn service_info() -> impl Responder {
    let endpoints: HashMap<String, String> = [
        ("health", "/health"),
        ("scrub_text", "/scrub/text"),
        ("scrub_file", "/scrub/file"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let features = [
        "Email redaction",
        "Credit card detection (Luhn validated)",
        "SSN scrubbing",
        "IP address removal",
        "AWS key detection",
        "Image metadata stripping (EXIF/XMP)",
        "PDF metadata removal",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    HttpResponse::Ok().json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        tagline: "PII Scrubber - 100% Local Processing".to_string(),
        version: VERSION.to_string(),
        endpoints,
        features,
        security: "Zero external API calls - All processing local".to_string(),
    })
}

/// HTTP handler for text scrubbing
///
/// Scrubbing is total: every string, including the empty one, yields a 200 with the
/// cleaned text and all six category counts.
pub async fn scrub_text(request: web::Json<ScrubTextRequest>, state: web::Data<AppState>) -> impl Responder {
    let result = state.engine.sanitize(&request.text);
    info!(
        "Scrubbed {} bytes of text, {} redaction(s).",
        request.text.len(),
        result.tally.total()
    );
    HttpResponse::Ok().json(ScrubTextResponse::from(result))
}

/// Keeps only the final path component of a client-supplied file name.
fn attachment_name(filename: Option<&str>) -> String {
    let base = filename
        .and_then(|name| Path::new(name).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string());
    format!("clean_{}", base)
}

/// HTTP handler for file metadata removal
///
/// The body is the raw file and `Content-Type` declares its kind. Cleaning runs once on
/// the blocking pool; a failure is reported, never retried.
pub async fn scrub_file(
    req: HttpRequest,
    query: web::Query<FileQuery>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    if body.is_empty() {
        warn!("Rejected empty upload");
        return Err(ApiError::EmptyUpload);
    }

    let declared = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let kind = MediaKind::from_declared(&declared).map_err(|e| {
        warn!("Rejected upload with declared kind '{}'", declared);
        ApiError::from(e)
    })?;

    debug!("Cleaning upload of {} bytes as {}", body.len(), kind);
    let cleaner = state.cleaner.clone();
    let cleaned = web::block(move || cleaner.clean(&body, kind))
        .await
        .map_err(|e| {
            error!("Blocking pool failed while cleaning {}: {}", kind, e);
            ApiError::Internal(e.to_string())
        })??;

    let filename = attachment_name(query.filename.as_deref());
    info!("Returning cleaned {} as '{}' ({} bytes)", kind, filename, cleaned.len());

    Ok(HttpResponse::Ok()
        .content_type(declared)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .insert_header(("X-Redactions", "metadata_removed"))
        .body(cleaned))
}
