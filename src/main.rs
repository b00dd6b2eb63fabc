use eframe::NativeOptions;
use egui::viewport::ViewportBuilder;
use tracing::{error, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lunar_calendar::app::LunarCalendar;
use lunar_calendar::phase_table;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging with structured format
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .compact()
        .init();

    // Reject a malformed table before opening the window.
    if let Err(e) = phase_table::validate(phase_table::events()) {
        error!("Failed to start: {}", e);
        panic!("phase table rejected: {}", e);
    }

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([560.0, 540.0])
            .with_min_inner_size([420.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lunar Activity Calendar",
        options,
        Box::new(|_cc| Box::new(LunarCalendar::new())),
    )
}
