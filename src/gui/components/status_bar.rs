// src/gui/components/status_bar.rs
use eframe::egui;
use crate::gui::app::{App, LoadState};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let line = app.status_line();
    ui.horizontal(|ui| {
        if app.load_state(app.current_page_kind()) == LoadState::Loading {
            ui.spinner();
        }
        match app.load_state(app.current_page_kind()) {
            LoadState::Failed(_) => {
                ui.colored_label(ui.visuals().error_fg_color, line);
            }
            _ => {
                ui.label(line);
            }
        }
    });
}
