//! Single-screen audio player with a scrubbable track bar and a drag volume
//! slider, built on egui and GStreamer.

pub mod config;
pub mod error;
pub mod ops;
pub mod playback;
pub mod types;
pub mod ui;
