use std::time::Duration;

use eframe::egui;

use crate::config::PlayerConfig;
use crate::playback::PlaybackBackend;
use crate::playback::transport_sync::TransportSync;
use crate::types::media::AudioSource;
use crate::types::playback_state::VolumeGeometry;
use crate::types::transport::{BackendCommand, TransportEvent};
use crate::ui::track_widget::track_bar;
use crate::ui::volume_slider::volume_slider;

/// Player screen for one open file. Dropped when another file is picked.
pub struct PlayerView<B: PlaybackBackend> {
    pub source: AudioSource,
    backend: B,
    sync: TransportSync,
    poll_interval: Duration,
}

impl<B: PlaybackBackend> PlayerView<B> {
    pub fn new(source: AudioSource, backend: B, config: &PlayerConfig) -> Self {
        let volume_bar = VolumeGeometry {
            width_pixels: config.volume_bar_width,
        };
        let sync = TransportSync::new(volume_bar, backend.volume());
        Self {
            source,
            backend,
            sync,
            poll_interval: config.position_poll_interval(),
        }
    }

    pub fn sync(&self) -> &TransportSync {
        &self.sync
    }

    /// Run one event through the synchronizer and apply its commands.
    pub fn dispatch(&mut self, event: TransportEvent) {
        for command in self.sync.handle(event) {
            self.apply(command);
        }
    }

    /// Pull pending backend notifications into the synchronizer.
    pub fn pump_backend(&mut self) {
        for event in self.backend.poll() {
            self.dispatch(event);
        }
    }

    fn apply(&mut self, command: BackendCommand) {
        let result = match command {
            BackendCommand::Play => self.backend.play(),
            BackendCommand::Resume => self.backend.resume(),
            BackendCommand::Pause => self.backend.pause(),
            BackendCommand::Seek(position_millis) => self.backend.seek(position_millis),
            BackendCommand::SetVolume(volume) => self.backend.set_volume(volume),
        };
        if let Err(e) = result {
            tracing::warn!("{:?} failed for {}: {}", command, self.source.file_name, e);
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.pump_backend();

        let mut events = Vec::new();
        let display = self.sync.display().clone();

        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() / 2.0 - 40.0).max(0.0));
            ui.label(egui::RichText::new(&self.source.file_name).strong());
            ui.add_space(8.0);

            if !display.controls_visible {
                ui.spinner();
                return;
            }

            events.extend(track_bar(ui, &display));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if display.show_play {
                    if ui.button("▶").clicked() {
                        events.push(TransportEvent::PlayClicked);
                    }
                } else if ui.button("⏸").clicked() {
                    events.push(TransportEvent::PauseClicked);
                }

                ui.label(&display.text);
                ui.add_space((ui.available_width() - display.volume_width - 40.0).max(0.0));

                let mute_icon = if display.muted { "🔇" } else { "🔊" };
                if ui.button(mute_icon).clicked() {
                    events.push(TransportEvent::MuteToggled);
                }
                events.extend(volume_slider(ui, &display));
            });
        });

        for event in events {
            self.dispatch(event);
        }

        let ctx = ui.ctx();
        if self.sync.take_repaint() {
            ctx.request_repaint();
        }
        if self.needs_polling() {
            ctx.request_repaint_after(self.poll_interval);
        }
    }

    /// Keep polling the bus while loading or playing. A file that failed to
    /// load never will, so polling stops there.
    pub fn needs_polling(&self) -> bool {
        if self.sync.load_failed() {
            return false;
        }
        !self.sync.is_loaded() || self.sync.state().is_playing
    }

    /// Message for the picker screen when the file could not be loaded.
    pub fn load_error(&self) -> Option<String> {
        self.sync
            .load_failed()
            .then(|| format!("Could not play {}", self.source.file_name))
    }
}
