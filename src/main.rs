use eframe::egui;
use gstreamer as gst;

use scrubplayer::config::PlayerConfig;
use scrubplayer::ui::app::ScrubPlayerApp;

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    // Opening a file retries init, so a failure here only delays the error
    if let Err(e) = gst::init() {
        tracing::error!("Failed to initialise GStreamer: {}", e);
    }

    let config = PlayerConfig::load_default();
    let title = config.window.title.clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    tracing::info!("Starting {}", title);
    eframe::run_native(
        &title,
        native_options,
        Box::new(|_cc| Ok(Box::new(ScrubPlayerApp::new(config)))),
    )
}
