// dataguard-core/src/cleaner/mod.rs
//! Strips embedded metadata from uploaded images and PDF documents.
//!
//! The cleaner does no PII detection on file content. It decodes the file strictly as the
//! declared kind and writes a fresh copy that carries the content but none of the
//! metadata (EXIF, XMP, text chunks, document info).
//!
//! License: MIT OR APACHE 2.0

mod document;
mod raster;

use log::{debug, info};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::CleanError;

/// A file kind the cleaner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Jpeg,
    Png,
    Gif,
    Bmp,
    WebP,
    Pdf,
}

impl MediaKind {
    pub const ALL: [MediaKind; 6] = [
        MediaKind::Jpeg,
        MediaKind::Png,
        MediaKind::Gif,
        MediaKind::Bmp,
        MediaKind::WebP,
        MediaKind::Pdf,
    ];

    /// Parses a declared kind: a MIME type (parameters allowed) or a bare format name.
    pub fn from_declared(declared: &str) -> Result<Self, CleanError> {
        let lowered = declared.trim().to_ascii_lowercase();
        let essence = lowered.split(';').next().unwrap_or_default().trim();

        let kind = match essence {
            "image/jpeg" | "image/jpg" | "image/pjpeg" | "jpeg" | "jpg" => Some(MediaKind::Jpeg),
            "image/png" | "png" => Some(MediaKind::Png),
            "image/gif" | "gif" => Some(MediaKind::Gif),
            "image/bmp" | "image/x-ms-bmp" | "bmp" => Some(MediaKind::Bmp),
            "image/webp" | "webp" => Some(MediaKind::WebP),
            other if other.contains("pdf") => Some(MediaKind::Pdf),
            _ => None,
        };

        kind.ok_or_else(|| CleanError::UnsupportedKind(declared.to_string()))
    }

    /// Guesses the kind from a file extension.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Result<Self, CleanError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CleanError::UnsupportedKind(path.display().to_string()))?;
        Self::from_declared(ext)
    }

    /// The canonical MIME type, used for responses.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaKind::Jpeg => "image/jpeg",
            MediaKind::Png => "image/png",
            MediaKind::Gif => "image/gif",
            MediaKind::Bmp => "image/bmp",
            MediaKind::WebP => "image/webp",
            MediaKind::Pdf => "application/pdf",
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, MediaKind::Pdf)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Jpeg => "JPEG",
            MediaKind::Png => "PNG",
            MediaKind::Gif => "GIF",
            MediaKind::Bmp => "BMP",
            MediaKind::WebP => "WEBP",
            MediaKind::Pdf => "PDF",
        };
        f.write_str(name)
    }
}

impl FromStr for MediaKind {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_declared(s)
    }
}

/// Metadata stripping for one file at a time.
pub trait FileCleaner: Send + Sync {
    /// Returns a copy of `bytes` with metadata removed, in the same format.
    fn clean(&self, bytes: &[u8], kind: MediaKind) -> Result<Vec<u8>, CleanError>;
}

/// The default cleaner: re-encodes images and rewrites PDFs without their metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataCleaner;

impl FileCleaner for MetadataCleaner {
    fn clean(&self, bytes: &[u8], kind: MediaKind) -> Result<Vec<u8>, CleanError> {
        if bytes.is_empty() {
            return Err(CleanError::malformed(kind.to_string(), "file is empty"));
        }

        debug!("Cleaning {} bytes declared as {}.", bytes.len(), kind);
        let cleaned = match kind {
            MediaKind::Pdf => document::clean_pdf(bytes)?,
            image_kind => raster::clean_image(bytes, image_kind)?,
        };
        info!("Stripped metadata from {} file ({} -> {} bytes).", kind, bytes.len(), cleaned.len());
        Ok(cleaned)
    }
}

/// Cleans `bytes` declared as `declared_kind` with the default cleaner.
pub fn clean_file(bytes: &[u8], declared_kind: &str) -> Result<Vec<u8>, CleanError> {
    let kind = MediaKind::from_declared(declared_kind)?;
    MetadataCleaner.clean(bytes, kind)
}
