//! Error types for I/O operations.
//!
//! Provides unified error handling for the PNG and BMP codecs and the file
//! layer underneath them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The destination file could not be created.
    #[error("cannot create {}: {}", .path.display(), .source)]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color layout.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoded samples did not fit a raster.
    #[error("raster error: {0}")]
    Raster(#[from] imgconv_core::Error),
}

impl IoError {
    /// Returns `true` if the destination file could not be created.
    pub fn is_create_error(&self) -> bool {
        matches!(self, Self::Create { .. })
    }

    /// Returns `true` for failures raised by an encoder.
    pub fn is_encode_error(&self) -> bool {
        matches!(self, Self::EncodeError(_))
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_message() {
        let err = IoError::Create {
            path: PathBuf::from("/no/such/dir/out.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/out.png"));
        assert!(msg.contains("not found"));
        assert!(err.is_create_error());
        assert!(!err.is_encode_error());
    }

    #[test]
    fn test_io_conversion() {
        let err: IoError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, IoError::Io(_)));
    }
}
