use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layout axis named by constraint errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StaggerError {
    #[error("Invalid argument: rows must be at least 1 (got {rows})")]
    InvalidRows { rows: usize },
    #[error("Invalid argument: min {axis} ({min}) exceeds max {axis} ({max})")]
    InvalidConstraints { axis: Axis, min: u32, max: u32 },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StaggerError {
    /// Every variant is a caller error; nothing here is worth retrying.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            StaggerError::InvalidRows { .. }
                | StaggerError::InvalidConstraints { .. }
                | StaggerError::InvalidArgument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StaggerError>;
