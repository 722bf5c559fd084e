use std::path::{Path, PathBuf};

use gstreamer as gst;

use crate::error::PlayerError;

/// A local audio file the player can open.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSource {
    pub path: PathBuf,
    pub file_name: String,
}

impl AudioSource {
    /// Validate a picked path against the allowed extensions.
    ///
    /// The stored path is canonical so it can be turned into a `file://` URI.
    pub fn from_path(path: &Path, allowed_extensions: &[String]) -> Result<Self, PlayerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !allowed_extensions.iter().any(|allowed| *allowed == ext) {
            return Err(PlayerError::UnsupportedFormat(ext));
        }

        let path = std::fs::canonicalize(path)
            .map_err(|_| PlayerError::NotFound(path.to_path_buf()))?;
        if !path.is_file() {
            return Err(PlayerError::NotFound(path));
        }

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self { path, file_name })
    }

    pub fn uri(&self) -> Result<String, PlayerError> {
        let uri = gst::glib::filename_to_uri(&self.path, None)?;
        Ok(uri.to_string())
    }
}
