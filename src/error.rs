//! Error types for canvas configuration.
//!
//! Runtime input problems (missing container geometry, non-finite pointer
//! coordinates) are not errors: those events are dropped and logged. Only
//! caller bugs in the grid/zone/settings configuration surface here.

use thiserror::Error;

/// Errors that can occur while building a canvas configuration
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Grid with a zero dimension
    #[error("Invalid grid: {rows}x{cols} (rows and cols must be at least 1)")]
    InvalidGrid { rows: u32, cols: u32 },

    /// Zone addresses a cell outside the grid
    #[error("Zone '{zone_id}' at ({row}, {col}) is outside the {rows}x{cols} grid")]
    ZoneOutOfBounds {
        zone_id: String,
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    /// Two zones share the same id
    #[error("Duplicate zone id: {0}")]
    DuplicateZoneId(String),

    /// Settings value outside its valid range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for canvas configuration
pub type Result<T> = std::result::Result<T, CanvasError>;
