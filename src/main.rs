use eframe::{CreationContext, NativeOptions, egui};
use log::info;

use formpass::app::FormPassApp;
use formpass::settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings = AppSettings::load();
    info!(
        "Starting FormPass with length bounds {}..={}",
        settings.min_length, settings.max_length
    );

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "FormPass",
        native_options,
        Box::new(|_cc: &CreationContext| Ok(Box::new(FormPassApp::new(settings)))),
    )
}
