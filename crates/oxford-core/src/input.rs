//! Image argument resolution.
//!
//! An image argument is either a URL the service fetches itself or a local
//! file whose bytes are uploaded. The decision is made once, here, and the
//! result is carried as an [`ImageSource`] for the request builder to match on.

use crate::error::{OxfordError, Result};
use std::io::Read;
use std::path::PathBuf;

/// A resolved image argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Anything starting with `http`, passed through untouched
    Remote(String),
    /// Contents of a local file
    Local { path: PathBuf, bytes: Vec<u8> },
}

impl ImageSource {
    /// Classify and, for local files, read the argument.
    ///
    /// Strings beginning with `http` (covering `https`) are always remote,
    /// whether or not they parse as URLs. Everything else is opened as a file
    /// and read to the end; the handle is closed before this returns, so a
    /// missing or unreadable file fails here, before any request is built.
    pub fn resolve(arg: &str) -> Result<Self> {
        if arg.starts_with("http") {
            return Ok(Self::Remote(arg.to_string()));
        }

        let path = PathBuf::from(arg);
        let file_error = |source| OxfordError::FileAccess {
            path: path.clone(),
            source,
        };
        let mut file = std::fs::File::open(&path).map_err(file_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(file_error)?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::Local { path, bytes })
    }
}
