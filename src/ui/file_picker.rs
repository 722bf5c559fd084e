use std::path::PathBuf;

use eframe::egui;

/// Opens the native dialog filtered to the playable extensions.
pub fn pick_audio_file(allowed_extensions: &[String]) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Audio", allowed_extensions)
        .pick_file()
}

/// The "choose a file" screen. Returns the picked path, if any.
pub fn file_picker_panel(
    ui: &mut egui::Ui,
    allowed_extensions: &[String],
    last_error: Option<&str>,
) -> Option<PathBuf> {
    let mut picked = None;

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 30.0).max(0.0));
        if ui.button("Choose an audio file").clicked() {
            picked = pick_audio_file(allowed_extensions);
        }
        ui.label(
            egui::RichText::new(allowed_extensions.join(", "))
                .size(10.0)
                .color(egui::Color32::GRAY),
        );
        if let Some(error) = last_error {
            ui.colored_label(egui::Color32::RED, error);
        }
    });

    picked
}
