use crate::ops::transport_funcs::{
    pointer_to_position, pointer_to_volume, position_text, sanitize_duration, sanitize_position,
};
use crate::types::playback_state::{MuteState, PlaybackState, TrackGeometry, VolumeGeometry};
use crate::types::transport::{BackendCommand, BackendStatus, TransportDisplay, TransportEvent};

/// Volumes that round down to 0% count as muted.
fn is_inaudible(volume: f64) -> bool {
    (volume * 100.0).floor() == 0.0
}

/// Keeps playback state, bar geometry and the displayed text in step.
///
/// Every event goes through [`TransportSync::handle`], which mutates state,
/// refreshes the display and returns the commands the backend must run.
#[derive(Debug, Clone)]
pub struct TransportSync {
    state: PlaybackState,
    track: TrackGeometry,
    volume_bar: VolumeGeometry,
    mute: MuteState,
    /// Last audible volume, restored when unmuting after a drag to zero
    audible_volume: f64,
    scrubbing: bool,
    loaded: bool,
    /// The backend stopped before it ever loaded the media
    load_failed: bool,
    completed: bool,
    display: TransportDisplay,
    needs_repaint: bool,
}

impl TransportSync {
    pub fn new(volume_bar: VolumeGeometry, initial_volume: f64) -> Self {
        let state = PlaybackState::new(initial_volume);
        let audible_volume = if is_inaudible(state.volume()) {
            1.0
        } else {
            state.volume()
        };
        let mut sync = Self {
            state,
            track: TrackGeometry::default(),
            volume_bar,
            mute: MuteState::Unmuted,
            audible_volume,
            scrubbing: false,
            loaded: false,
            load_failed: false,
            completed: false,
            display: TransportDisplay::default(),
            needs_repaint: false,
        };
        sync.update_display();
        sync
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn mute_state(&self) -> MuteState {
        self.mute
    }

    pub fn display(&self) -> &TransportDisplay {
        &self.display
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Returns whether the surface must be repainted, clearing the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub fn handle(&mut self, event: TransportEvent) -> Vec<BackendCommand> {
        let mut commands = Vec::new();

        match event {
            TransportEvent::TrackPressed { local_x } | TransportEvent::TrackDragged { local_x } => {
                let position = pointer_to_position(
                    local_x,
                    self.track.width_pixels,
                    self.state.duration_millis(),
                );
                self.scrubbing = true;
                self.completed = false;
                self.state.set_position(position as f64);
                commands.push(BackendCommand::Seek(position));
            }
            TransportEvent::TrackReleased => {
                self.scrubbing = false;
                return commands;
            }
            TransportEvent::TrackResized { width } => {
                self.track = TrackGeometry::new(width);
            }
            TransportEvent::VolumePressed { local_x } | TransportEvent::VolumeDragged { local_x } => {
                let volume = pointer_to_volume(local_x, self.volume_bar.width_pixels);
                self.apply_dragged_volume(volume);
                commands.push(BackendCommand::SetVolume(self.state.volume()));
            }
            TransportEvent::PlayClicked => {
                if self.state.is_playing {
                    return commands;
                }
                if self.completed {
                    self.completed = false;
                    self.state.set_position(0.0);
                    commands.push(BackendCommand::Seek(0));
                    commands.push(BackendCommand::Play);
                } else if self.state.position_millis() != 0.0 {
                    commands.push(BackendCommand::Resume);
                } else {
                    commands.push(BackendCommand::Play);
                }
                self.state.is_playing = true;
            }
            TransportEvent::PauseClicked => {
                if !self.state.is_playing {
                    return commands;
                }
                self.state.is_playing = false;
                commands.push(BackendCommand::Pause);
            }
            TransportEvent::MuteToggled => {
                match self.mute {
                    MuteState::Unmuted => self.mute(),
                    MuteState::Muted { previous_volume } => self.unmute(previous_volume),
                }
                commands.push(BackendCommand::SetVolume(self.state.volume()));
            }
            TransportEvent::Loaded { duration_millis } => {
                self.loaded = true;
                self.state.set_duration(sanitize_duration(duration_millis));
            }
            TransportEvent::DurationChanged(duration_millis) => {
                self.state.set_duration(sanitize_duration(duration_millis));
            }
            TransportEvent::PositionChanged(position_millis) => {
                // The live drag value wins over backend ticks
                if self.scrubbing {
                    return commands;
                }
                let position = sanitize_position(position_millis);
                if position == self.state.position_millis() {
                    return commands;
                }
                self.state.set_position(position);
            }
            TransportEvent::StateChanged(status) => match status {
                BackendStatus::Completed => {
                    self.state.is_playing = false;
                    self.completed = true;
                }
                BackendStatus::Stopped => {
                    self.state.is_playing = false;
                    if !self.loaded {
                        self.load_failed = true;
                    }
                }
                BackendStatus::Playing | BackendStatus::Paused => return commands,
            },
            TransportEvent::SeekComplete => {
                tracing::debug!("Seek complete at {} ms", self.state.position_millis());
                return commands;
            }
        }

        self.update_display();
        commands
    }

    fn mute(&mut self) {
        self.mute = MuteState::Muted {
            previous_volume: self.state.volume(),
        };
        self.state.set_volume(0.0);
    }

    fn unmute(&mut self, previous_volume: f64) {
        self.mute = MuteState::Unmuted;
        self.state.set_volume(previous_volume);
        if !is_inaudible(self.state.volume()) {
            self.audible_volume = self.state.volume();
        }
    }

    /// A drag always leaves `Muted`; the dragged value is the new baseline.
    /// Dragging down to an inaudible level mutes, remembering the last
    /// audible volume for the mute button.
    fn apply_dragged_volume(&mut self, volume: f64) {
        if is_inaudible(volume) {
            self.mute = MuteState::Muted {
                previous_volume: self.audible_volume,
            };
            self.state.set_volume(0.0);
        } else {
            self.mute = MuteState::Unmuted;
            self.state.set_volume(volume);
            self.audible_volume = self.state.volume();
        }
    }

    fn update_display(&mut self) {
        self.display = TransportDisplay {
            track_fill: self.state.track_fill(self.track),
            track_width: self.track.width_pixels,
            volume_fill: self.state.volume_fill(self.volume_bar),
            volume_width: self.volume_bar.width_pixels,
            text: position_text(self.state.position_millis(), self.state.duration_millis()),
            show_play: !self.state.is_playing,
            muted: self.mute.is_muted(),
            controls_visible: self.loaded,
        };
        self.needs_repaint = true;
    }
}
