use std::path::PathBuf;

use thiserror::Error;

use crate::shape::Shape;

// =============================================================================
// Box errors
// =============================================================================

/// Failures returned by [`ShapeBox`](crate::ShapeBox) operations.
///
/// None of these are fatal; the caller decides whether to propagate, log or
/// ignore them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    #[error("box already contains the maximum quantity of shapes ({capacity})")]
    CapacityExceeded {
        capacity: isize,
        /// The shape that did not fit, handed back to the caller.
        shape: Shape,
    },

    #[error(
        "requested shape index {index} is out of range (no shape found or shapes capacity exceeded)"
    )]
    IndexOutOfRange { index: isize, len: usize },

    #[error("there are no circles in the list of shapes")]
    CirclesNotFound,
}

impl BoxError {
    pub fn capacity_exceeded(capacity: isize, shape: Shape) -> Self {
        Self::CapacityExceeded { capacity, shape }
    }

    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Recovers the rejected shape from a failed add.
    pub fn into_rejected_shape(self) -> Option<Shape> {
        match self {
            Self::CapacityExceeded { shape, .. } => Some(shape),
            _ => None,
        }
    }
}

pub type Result<T, E = BoxError> = std::result::Result<T, E>;

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for environment variable {var}: expected an integer")]
    InvalidEnv { var: String, value: String },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_env(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnv {
            var: var.into(),
            value: value.into(),
        }
    }
}
