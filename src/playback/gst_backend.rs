use std::time::{Duration, Instant};

use gst::prelude::*;
use gstreamer as gst;
use gstreamer_pbutils as gst_pbutils;

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::playback::PlaybackBackend;
use crate::types::media::AudioSource;
use crate::types::transport::{BackendStatus, TransportEvent};

/// Discover a file's duration in milliseconds before the pipeline is up.
pub fn discover_duration(uri: &str, timeout: Duration) -> Option<f64> {
    let timeout = gst::ClockTime::from_mseconds(timeout.as_millis() as u64);
    let discoverer = gst_pbutils::Discoverer::new(timeout).ok()?;
    let info = match discoverer.discover_uri(uri) {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!("Could not discover {}: {}", uri, e);
            return None;
        }
    };
    let duration = info.duration();
    tracing::debug!("Discovered duration for {}: {:?}", uri, duration);
    duration.map(|d| d.mseconds() as f64)
}

/// A queried duration when the pipeline has one, otherwise the discovered one.
pub fn resolve_duration(queried: Option<f64>, discovered: Option<f64>) -> Option<f64> {
    queried.or(discovered)
}

/// Plays a single file through a `playbin` pipeline.
pub struct GstBackend {
    playbin: gst::Element,
    bus: gst::Bus,
    discovered_duration: Option<f64>,
    loaded: bool,
    seek_pending: bool,
    poll_interval: Duration,
    last_position_query: Option<Instant>,
}

impl GstBackend {
    pub fn open(source: &AudioSource, config: &PlayerConfig) -> Result<Self, PlayerError> {
        gst::init()?;

        let uri = source.uri()?;
        // Discovery blocks the UI thread, a zero timeout skips it
        let discovered_duration = config
            .discoverer_timeout()
            .and_then(|timeout| discover_duration(&uri, timeout));

        let playbin = gst::ElementFactory::make("playbin")
            .name("scrubplayer")
            .property("uri", uri.as_str())
            .build()?;
        playbin.set_property("volume", config.initial_volume);

        let bus = playbin.bus().ok_or(PlayerError::MissingBus)?;

        // Prerolling in PAUSED gives us the loaded notification without starting output
        playbin.set_state(gst::State::Paused)?;
        tracing::info!("Opened {}", source.file_name);

        Ok(Self {
            playbin,
            bus,
            discovered_duration,
            loaded: false,
            seek_pending: false,
            poll_interval: config.position_poll_interval(),
            last_position_query: None,
        })
    }

    fn query_duration(&self) -> Option<f64> {
        let queried = self
            .playbin
            .query_duration::<gst::ClockTime>()
            .map(|d| d.mseconds() as f64);
        resolve_duration(queried, self.discovered_duration)
    }

    fn query_position(&self) -> Option<f64> {
        self.playbin
            .query_position::<gst::ClockTime>()
            .map(|p| p.mseconds() as f64)
    }

    fn set_state(&self, state: gst::State) -> Result<(), PlayerError> {
        self.playbin.set_state(state)?;
        Ok(())
    }

    fn position_due(&mut self, now: Instant) -> bool {
        match self.last_position_query {
            Some(last) if now.duration_since(last) < self.poll_interval => false,
            _ => {
                self.last_position_query = Some(now);
                true
            }
        }
    }
}

impl PlaybackBackend for GstBackend {
    fn play(&mut self) -> Result<(), PlayerError> {
        tracing::debug!("Play");
        self.set_state(gst::State::Playing)
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        tracing::debug!("Pause");
        self.set_state(gst::State::Paused)
    }

    fn resume(&mut self) -> Result<(), PlayerError> {
        tracing::debug!("Resume");
        self.set_state(gst::State::Playing)
    }

    fn seek(&mut self, position_millis: u64) -> Result<(), PlayerError> {
        tracing::debug!("Seeking to {} ms", position_millis);
        self.playbin.seek_simple(
            gst::SeekFlags::FLUSH | gst::SeekFlags::ACCURATE,
            gst::ClockTime::from_mseconds(position_millis),
        )?;
        self.seek_pending = true;
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), PlayerError> {
        self.playbin.set_property("volume", volume.clamp(0.0, 1.0));
        Ok(())
    }

    fn volume(&self) -> f64 {
        self.playbin.property::<f64>("volume")
    }

    fn poll(&mut self) -> Vec<TransportEvent> {
        use gst::MessageView;

        let mut events = Vec::new();

        while let Some(msg) = self.bus.pop() {
            match msg.view() {
                MessageView::Eos(..) => {
                    tracing::info!("Playback completed");
                    events.push(TransportEvent::StateChanged(BackendStatus::Completed));
                }
                MessageView::Error(err) => {
                    tracing::error!(
                        "Error from {:?}: {} ({:?})",
                        err.src().map(|s| s.path_string()),
                        err.error(),
                        err.debug()
                    );
                    events.push(TransportEvent::StateChanged(BackendStatus::Stopped));
                }
                MessageView::DurationChanged(..) => {
                    events.push(TransportEvent::DurationChanged(self.query_duration()));
                }
                MessageView::AsyncDone(..) => {
                    if !self.loaded {
                        self.loaded = true;
                        let duration_millis = self.query_duration();
                        tracing::info!("Loaded, duration {:?} ms", duration_millis);
                        events.push(TransportEvent::Loaded { duration_millis });
                    } else if self.seek_pending {
                        self.seek_pending = false;
                        events.push(TransportEvent::SeekComplete);
                    }
                }
                MessageView::StateChanged(change) => {
                    if change.src() != Some(self.playbin.upcast_ref::<gst::Object>()) {
                        continue;
                    }
                    let status = match change.current() {
                        gst::State::Playing => BackendStatus::Playing,
                        gst::State::Paused => BackendStatus::Paused,
                        _ => continue,
                    };
                    events.push(TransportEvent::StateChanged(status));
                }
                _ => {}
            }
        }

        if self.loaded && self.position_due(Instant::now()) {
            events.push(TransportEvent::PositionChanged(self.query_position()));
        }

        events
    }
}

impl Drop for GstBackend {
    fn drop(&mut self) {
        if let Err(e) = self.playbin.set_state(gst::State::Null) {
            tracing::warn!("Failed to stop pipeline: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_duration_prefers_query() {
        assert_eq!(resolve_duration(Some(90_000.0), Some(91_000.0)), Some(90_000.0));
    }

    #[test]
    fn test_resolve_duration_falls_back_to_discovered() {
        assert_eq!(resolve_duration(None, Some(91_000.0)), Some(91_000.0));
        assert_eq!(resolve_duration(None, None), None);
    }
}
