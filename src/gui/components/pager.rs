// src/gui/components/pager.rs
use eframe::egui;
use crate::{gui::app::App, view::GridView};

pub fn draw(ui: &mut egui::Ui, app: &mut App, view: &GridView) {
    ui.horizontal(|ui| {
        if ui.add_enabled(view.prev_enabled, egui::Button::new("◀ Prev")).clicked() {
            app.grid.prev_page();
        }
        ui.label(view.page_text());
        if ui.add_enabled(view.next_enabled, egui::Button::new("Next ▶")).clicked() {
            app.grid.next_page();
        }
    });
}
