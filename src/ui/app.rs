use std::path::Path;

use eframe::egui;

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::playback::gst_backend::GstBackend;
use crate::types::media::AudioSource;
use crate::ui::file_picker::{file_picker_panel, pick_audio_file};
use crate::ui::player_view::PlayerView;

pub enum Screen {
    Picker,
    Player(PlayerView<GstBackend>),
}

pub struct ScrubPlayerApp {
    pub config: PlayerConfig,
    pub screen: Screen,
    pub last_error: Option<String>,
}

impl ScrubPlayerApp {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            screen: Screen::Picker,
            last_error: None,
        }
    }

    /// Replace whatever is playing with a fresh player for `path`.
    fn open(&mut self, path: &Path) {
        match self.build_player(path) {
            Ok(view) => {
                self.last_error = None;
                // Dropping the old view tears down its pipeline
                self.screen = Screen::Player(view);
            }
            Err(e) => {
                tracing::warn!("Cannot open {}: {}", path.display(), e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn build_player(&self, path: &Path) -> Result<PlayerView<GstBackend>, PlayerError> {
        let source = AudioSource::from_path(path, &self.config.allowed_extensions)?;
        let backend = GstBackend::open(&source, &self.config)?;
        Ok(PlayerView::new(source, backend, &self.config))
    }
}

impl eframe::App for ScrubPlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut picked = None;

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::Picker => {
                picked = file_picker_panel(
                    ui,
                    &self.config.allowed_extensions,
                    self.last_error.as_deref(),
                );
            }
            Screen::Player(view) => {
                if ui.button("Choose another file").clicked() {
                    picked = pick_audio_file(&self.config.allowed_extensions);
                }
                if let Some(error) = &self.last_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
                view.show(ui);
            }
        });

        let load_error = match &self.screen {
            Screen::Player(view) => view.load_error(),
            Screen::Picker => None,
        };
        if let Some(error) = load_error {
            tracing::warn!("{}", error);
            self.last_error = Some(error);
            self.screen = Screen::Picker;
        }

        if let Some(path) = picked {
            self.open(&path);
        }
    }
}
