//! Local HTTP surface over the scrub engine and the metadata cleaner.
//!
//! Routes:
//! * `GET /health`: liveness.
//! * `GET /`: service information.
//! * `POST /scrub/text`: JSON `{"text": ...}` in, cleaned text and tally out.
//! * `POST /scrub/file`: raw file body in (`Content-Type` declares the kind), cleaned
//!   file out as an attachment.

pub mod config;
pub mod handlers;
pub mod models;

use actix_web::middleware::Logger;
use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::sync::Arc;

use dataguard_core::{FileCleaner, MetadataCleaner, RegexEngine};

use crate::api::config::ServerConfig;
use crate::api::handlers::{health_check, scrub_file, scrub_text, service_info};
use crate::api::models::ErrorResponse;

/// Shared, immutable state handed to every worker.
pub struct AppState {
    pub engine: RegexEngine,
    pub cleaner: Arc<dyn FileCleaner>,
}

impl AppState {
    pub fn new(engine: RegexEngine, cleaner: Arc<dyn FileCleaner>) -> Self {
        Self { engine, cleaner }
    }

    /// Built-in rules and the default metadata cleaner.
    pub fn with_defaults() -> Result<Self> {
        let engine = RegexEngine::new().context("Failed to compile the built-in rules")?;
        Ok(Self::new(engine, Arc::new(MetadataCleaner)))
    }
}

/// Registers the routes and body limits. Used by the server and by tests.
pub fn configure_routes(max_upload_bytes: usize) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        let json_config = web::JsonConfig::default()
            .limit(max_upload_bytes)
            .error_handler(|err, _req| {
                warn!("Rejected JSON body: {}", err);
                let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
                InternalError::from_response(err, response).into()
            });

        cfg.app_data(json_config)
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .service(web::resource("/").route(web::get().to(service_info)))
            .service(web::resource("/health").route(web::get().to(health_check)))
            .service(web::resource("/scrub/text").route(web::post().to(scrub_text)))
            .service(web::resource("/scrub/file").route(web::post().to(scrub_file)));
    }
}

/// Starts the HTTP server and runs until it is shut down.
pub async fn start_server(config: ServerConfig, state: AppState) -> Result<()> {
    info!("Starting DataGuard API server on {}:{}", config.host, config.port);

    let state = web::Data::new(state);
    let limit = config.max_upload_bytes;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure_routes(limit))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.host.as_str(), config.port))
        .map_err(|e| {
            error!("Failed to bind to {}:{}: {}", config.host, config.port, e);
            e
        })
        .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    info!("DataGuard API server stopped.");
    Ok(())
}
