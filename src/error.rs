//! Errors for the data loaders.
//!
//! The per-tick simulation never fails; only shape tables and tuning
//! documents coming from outside the crate are validated.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Shape table error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shape table validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("No {0} shapes defined")]
    EmptyVariants(&'static str),

    #[error("Shape {name} has {vertices} vertices (need at least 3)")]
    TooFewVertices { name: String, vertices: usize },
}

/// Tuning validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{field} must be positive and finite (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be at least 1")]
    Zero { field: &'static str },

    #[error("asteroid speed range is empty ({min}..{max})")]
    EmptySpeedRange { min: f32, max: f32 },
}
