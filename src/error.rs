//! See [`Error`].

use std::{io, path::PathBuf};
use tch::TchError;
use thiserror::Error;

/// Error types for this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Space bounds differ in length (low: {low}, high: {high})")]
    BoundsLength { low: usize, high: usize },

    #[error("Invalid space bounds at index {index}: [{low}, {high}]")]
    InvalidBounds { index: usize, low: f32, high: f32 },

    #[error("Model file `{}` does not exist", path.display())]
    ModelNotFound { path: PathBuf },

    #[error("Failed to load model from `{}`", path.display())]
    LoadModel {
        path: PathBuf,
        #[source]
        source: TchError,
    },

    #[error("Failed to run inference")]
    RunInference(#[source] TchError),

    #[error("Observation has {actual} elements, expected {expected}")]
    ObservationShape { expected: usize, actual: usize },

    #[error("Action has {actual} elements, expected {expected}")]
    ActionShape { expected: usize, actual: usize },

    #[error("Failed to read policy settings from `{}`", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Thread count {0} is out of range for libtorch")]
    ThreadCount(usize),

    #[error("Failed to parse policy settings")]
    ParseSettings(#[from] toml::de::Error),
}

/// Type alias for [`Result<T, Error>`].
pub type Result<T> = std::result::Result<T, Error>;
