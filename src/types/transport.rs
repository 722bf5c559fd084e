/// Everything that can change transport state, from the user or the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// Pointer went down on the track bar
    TrackPressed { local_x: f32 },
    /// Pointer moved while held on the track bar
    TrackDragged { local_x: f32 },
    /// Pointer released after pressing the track bar
    TrackReleased,
    /// Track bar was laid out with a new width
    TrackResized { width: f32 },
    VolumePressed { local_x: f32 },
    VolumeDragged { local_x: f32 },
    PlayClicked,
    PauseClicked,
    MuteToggled,
    /// Media is ready; duration may still be unknown
    Loaded { duration_millis: Option<f64> },
    DurationChanged(Option<f64>),
    PositionChanged(Option<f64>),
    StateChanged(BackendStatus),
    SeekComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Playing,
    Paused,
    Stopped,
    Completed,
}

/// Requests for the playback backend produced by the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendCommand {
    Play,
    Resume,
    Pause,
    Seek(u64),
    SetVolume(f64),
}

/// What the player view draws.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportDisplay {
    pub track_fill: f32,
    pub track_width: f32,
    pub volume_fill: f32,
    pub volume_width: f32,
    /// `"pos / dur"`
    pub text: String,
    pub show_play: bool,
    pub muted: bool,
    /// Hidden until the backend reports the media as loaded
    pub controls_visible: bool,
}
