// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use sheet_catalog::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    let state = match gui::args::parse_args(std::env::args().skip(1)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e.status_text());
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Sheet Catalog")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
