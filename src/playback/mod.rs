pub mod gst_backend;
pub mod transport_sync;

use crate::error::PlayerError;
use crate::types::transport::TransportEvent;

/// An audio output the player view can drive.
///
/// Notifications are pulled with [`PlaybackBackend::poll`] from the UI thread,
/// so implementations must never block there.
pub trait PlaybackBackend {
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    fn resume(&mut self) -> Result<(), PlayerError>;
    fn seek(&mut self, position_millis: u64) -> Result<(), PlayerError>;
    fn set_volume(&mut self, volume: f64) -> Result<(), PlayerError>;
    fn volume(&self) -> f64;
    /// Drain pending notifications (loaded, duration, position, state, seek).
    fn poll(&mut self) -> Vec<TransportEvent>;
}
