mod app;
mod ui_theme;

use build_iconizer::config::AppConfig;
use build_iconizer::i18n::{tr, Text};
use eframe::egui;
use std::env;

fn main() -> Result<(), eframe::Error> {
    // Force OpenGL backend on macOS to avoid Metal compatibility issues
    env::set_var("wgpu_backend", "gl");

    env_logger::init();

    let config_path = AppConfig::default_path();
    let config = AppConfig::load_or_default(&config_path);
    let title = tr(config.locale, Text::WindowTitle);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 700.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            let app = app::BuildIconizerApp::new(cc, config, config_path)?;
            Ok(Box::new(app))
        }),
    )
}
