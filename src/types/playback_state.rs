/// Playback values mirrored from the backend.
///
/// All setters clamp, so `0 <= position_millis <= duration_millis`,
/// `duration_millis >= 1` and `0 <= volume <= 1` hold after any update.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    position_millis: f64,
    duration_millis: f64,
    volume: f64,
    pub is_playing: bool,
}

impl PlaybackState {
    pub fn new(volume: f64) -> Self {
        let mut state = Self {
            position_millis: 0.0,
            duration_millis: 1.0,
            volume: 1.0,
            is_playing: false,
        };
        state.set_volume(volume);
        state
    }

    pub fn position_millis(&self) -> f64 {
        self.position_millis
    }

    pub fn duration_millis(&self) -> f64 {
        self.duration_millis
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn set_position(&mut self, millis: f64) {
        self.position_millis = if millis.is_finite() {
            millis.clamp(0.0, self.duration_millis)
        } else {
            0.0
        };
    }

    /// Also re-clamps the current position into the new duration.
    pub fn set_duration(&mut self, millis: f64) {
        self.duration_millis = if millis.is_finite() { millis.max(1.0) } else { 1.0 };
        self.set_position(self.position_millis);
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Filled portion of the track bar for the current position.
    pub fn track_fill(&self, track: TrackGeometry) -> f32 {
        let ratio = self.position_millis / self.duration_millis;
        (ratio * track.width_pixels as f64) as f32
    }

    /// Filled portion of the volume slider for the current volume.
    pub fn volume_fill(&self, volume_bar: VolumeGeometry) -> f32 {
        (self.volume * volume_bar.width_pixels as f64) as f32
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Live width of the track bar, fed back from layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub width_pixels: f32,
}

impl TrackGeometry {
    pub fn new(width_pixels: f32) -> Self {
        let width_pixels = if width_pixels.is_finite() {
            width_pixels.max(0.0)
        } else {
            0.0
        };
        Self { width_pixels }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeGeometry {
    pub width_pixels: f32,
}

impl Default for VolumeGeometry {
    fn default() -> Self {
        Self {
            width_pixels: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MuteState {
    #[default]
    Unmuted,
    Muted {
        previous_volume: f64,
    },
}

impl MuteState {
    pub fn is_muted(&self) -> bool {
        matches!(self, MuteState::Muted { .. })
    }
}
