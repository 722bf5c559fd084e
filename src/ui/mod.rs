pub mod app;
pub mod file_picker;
pub mod player_view;
pub mod track_widget;
pub mod volume_slider;
