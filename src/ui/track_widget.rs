use eframe::egui;

use crate::types::transport::{TransportDisplay, TransportEvent};

pub const TRACK_HEIGHT: f32 = 10.0;
const BAR_HEIGHT: f32 = 5.0;
const HANDLE_RADIUS: f32 = 6.0;

pub const BAR_BACKGROUND: egui::Color32 = egui::Color32::from_gray(158);
pub const BAR_FILL: egui::Color32 = egui::Color32::from_gray(33);

/// Pointer interaction on a horizontal bar, as gesture events.
pub struct BarGesture {
    pub pressed: Option<f32>,
    pub dragged: Option<f32>,
    pub released: bool,
}

/// Reads press/drag/release from a bar's response as x-offsets local to `rect`.
///
/// A press is reported on the frame the button goes down, not when egui
/// decides a drag or click has happened.
pub fn read_gesture(ui: &egui::Ui, response: &egui::Response, rect: egui::Rect) -> BarGesture {
    let just_pressed = (response.is_pointer_button_down_on() || response.contains_pointer())
        && ui.input(|i| i.pointer.primary_pressed());

    let mut gesture = BarGesture {
        pressed: None,
        dragged: None,
        released: response.drag_stopped() || response.clicked(),
    };
    let pointer_pos = response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.interact_pos()));
    if let Some(pointer_pos) = pointer_pos {
        let local_x = pointer_pos.x - rect.left();
        if just_pressed {
            gesture.pressed = Some(local_x);
        } else if response.dragged() {
            gesture.dragged = Some(local_x);
        }
    }
    gesture
}

/// Paints a background rect, a fill rect and a round handle at the fill edge.
pub fn paint_bar(painter: &egui::Painter, rect: egui::Rect, bar_height: f32, fill: f32) {
    let bar_rect = egui::Rect::from_min_size(
        egui::pos2(rect.left(), rect.center().y - bar_height / 2.0),
        egui::vec2(rect.width(), bar_height),
    );
    let fill = fill.clamp(0.0, rect.width());
    let fill_rect = egui::Rect::from_min_size(bar_rect.min, egui::vec2(fill, bar_height));

    painter.rect_filled(bar_rect, 3.0, BAR_BACKGROUND);
    painter.rect_filled(fill_rect, 3.0, BAR_FILL);
    painter.circle_filled(
        egui::pos2(rect.left() + fill, rect.center().y),
        HANDLE_RADIUS,
        BAR_FILL,
    );
}

/// Full-width scrubbable track bar.
pub fn track_bar(ui: &mut egui::Ui, display: &TransportDisplay) -> Vec<TransportEvent> {
    let mut events = Vec::new();

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), TRACK_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    // Width must be current before any pointer offset is mapped
    if rect.width() != display.track_width {
        events.push(TransportEvent::TrackResized {
            width: rect.width(),
        });
    }

    let gesture = read_gesture(ui, &response, rect);
    if let Some(local_x) = gesture.pressed {
        events.push(TransportEvent::TrackPressed { local_x });
    }
    if let Some(local_x) = gesture.dragged {
        events.push(TransportEvent::TrackDragged { local_x });
    }
    if gesture.released {
        events.push(TransportEvent::TrackReleased);
    }

    if ui.is_rect_visible(rect) {
        // Scale the fill if the width changed this frame
        let fill = if display.track_width > 0.0 {
            display.track_fill / display.track_width * rect.width()
        } else {
            0.0
        };
        paint_bar(ui.painter(), rect, BAR_HEIGHT, fill);
    }

    events
}
