//! Errors for image-based area detection.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageAreaError {
    /// Only jpg, jpeg and png uploads are processed.
    #[error("unsupported image type '{file_name}' (expected jpg, jpeg or png)")]
    UnsupportedType { file_name: String },

    /// The image could not be opened or decoded.
    #[error("failed to load image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A filesystem step of the upload failed.
    #[error("failed to {operation} {}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}
