//! Container detection.
//!
//! A file is classified by its leading signature when it can be read, and
//! by its extension otherwise. Signatures win: a PNG stream saved as
//! `out.bmp` is still read as PNG.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PNG stream signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// Windows bitmap.
    Bmp,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path (signature first, then extension).
    ///
    /// An unreadable file falls back to its extension; opening it for
    /// decoding reports the actual I/O error.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        match sniff(path) {
            Ok(Format::Unknown) | Err(_) => Ok(Self::from_extension(path)),
            Ok(format) => Ok(format),
        }
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("bmp") | Some("dib") => Format::Bmp,
            _ => Format::Unknown,
        }
    }

    /// Classifies the leading bytes of a stream.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Format::Png
        } else if bytes.starts_with(b"BM") {
            Format::Bmp
        } else {
            Format::Unknown
        }
    }

    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Bmp => "bmp",
            Format::Unknown => "",
        }
    }
}

/// Reads up to the first 8 bytes of `path` and classifies them.
fn sniff(path: &Path) -> std::io::Result<Format> {
    let mut header = Vec::with_capacity(PNG_SIGNATURE.len());
    File::open(path)?
        .take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut header)?;
    Ok(Format::from_bytes(&header))
}
