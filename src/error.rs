use std::path::PathBuf;

use gstreamer as gst;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("GStreamer error: {0}")]
    Glib(#[from] gst::glib::Error),

    #[error("GStreamer call failed: {0}")]
    GlibCall(#[from] gst::glib::BoolError),

    #[error("Pipeline state change failed: {0}")]
    StateChange(#[from] gst::StateChangeError),

    #[error("Pipeline has no bus")]
    MissingBus,

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Audio file not found: {0}")]
    NotFound(PathBuf),
}
