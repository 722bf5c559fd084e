use eframe::egui;

use crate::types::transport::{TransportDisplay, TransportEvent};
use crate::ui::track_widget::{paint_bar, read_gesture};

const SLIDER_HEIGHT: f32 = 12.0;
const BAR_HEIGHT: f32 = 4.0;

/// Fixed-width drag-to-set volume slider.
pub fn volume_slider(ui: &mut egui::Ui, display: &TransportDisplay) -> Vec<TransportEvent> {
    let mut events = Vec::new();

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(display.volume_width, SLIDER_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let gesture = read_gesture(ui, &response, rect);
    if let Some(local_x) = gesture.pressed {
        events.push(TransportEvent::VolumePressed { local_x });
    }
    if let Some(local_x) = gesture.dragged {
        events.push(TransportEvent::VolumeDragged { local_x });
    }

    if ui.is_rect_visible(rect) {
        paint_bar(ui.painter(), rect, BAR_HEIGHT, display.volume_fill);
    }

    events
}
