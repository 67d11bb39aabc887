use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a visualizer run.
///
/// Malformed rows in the pairs file are not errors; the parser drops them.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to open window: {0}")]
    Window(#[from] eframe::Error),
}

pub type VisualizerResult<T> = Result<T, VisualizerError>;
