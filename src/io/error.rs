//! Error types for synthesis and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Style selector string does not name a known pattern mode
    UnknownMode {
        /// The rejected selector string
        value: String,
    },

    /// Background color string is not a recognized web color
    InvalidColor {
        /// The rejected color string
        value: String,
        /// Explanation of why the value could not be parsed
        reason: &'static str,
    },

    /// Requested canvas dimensions are unusable for rasterization
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// A rendering collaborator failed during synthesis
    Collaborator {
        /// Name of the collaborator that failed
        collaborator: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Encoding a canvas into a transportable image failed
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode { value } => {
                write!(f, "Unknown pattern mode '{value}'")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "Cannot rasterize a {width}x{height} canvas")
            }
            Self::Collaborator {
                collaborator,
                reason,
            } => {
                write!(f, "{collaborator} failed: {reason}")
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageEncode { source } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<image::ImageError> for SynthesisError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageEncode { source: err }
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a collaborator failure error
pub fn collaborator_error(
    collaborator: &'static str,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::Collaborator {
        collaborator,
        reason: reason.to_string(),
    }
}

/// Create an invalid color error
pub const fn invalid_color(value: String, reason: &'static str) -> SynthesisError {
    SynthesisError::InvalidColor { value, reason }
}
