/// Error types for the photo editing pipeline
///
/// Every failure the user can run into ends up here. The enum is `Clone`
/// so it can be carried inside iced messages; image library errors are
/// therefore kept behind an `Arc`.
use std::path::PathBuf;
use std::sync::Arc;

/// Result alias used throughout the pipeline
pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    /// Input file is missing, unreadable or not a decodable image
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Arc<image::ImageError>,
    },

    /// The sharpen filter could not run on the image
    #[error("cannot sharpen image: {reason}")]
    Filter { reason: String },

    /// Writing the output file failed
    #[error("cannot write {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: Arc<image::ImageError>,
    },

    /// Save was requested before any image was loaded
    #[error("no edited image to save")]
    NothingToSave,

    /// The file picker was dismissed
    #[error("no file selected")]
    NoSelection,

    /// A background worker died before reporting back
    #[error("background task failed: {0}")]
    Worker(String),
}

impl PipelineError {
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        PipelineError::Decode {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn save(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        PipelineError::Save {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(err: tokio::task::JoinError) -> Self {
        PipelineError::Worker(err.to_string())
    }
}
