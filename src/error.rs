use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RectoError {
    #[error("Failed to read rectangles file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode rectangles JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Need at least two rectangles to relate, found {found}")]
    NotEnoughRectangles { found: usize },

    #[error("Duplicate rectangle name '{0}'")]
    DuplicateName(String),
}
