// src/gui/components/source_bar.rs
//
// Export URL for the current page. Each page keeps its own URL; "Load"
// refetches with whatever is in the box.

use eframe::egui;
use crate::gui::app::{App, LoadState};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();
    let busy = app.load_state(kind) == LoadState::Loading;
    let local = app.state.options.source.input.is_some();

    let mut clicked = false;
    let text = app.url_inputs.entry(kind).or_default();

    ui.horizontal(|ui| {
        ui.label("Sheet URL:");
        let resp = ui.add_enabled(
            !local,
            egui::TextEdit::singleline(text)
                .hint_text("Published CSV export URL")
                .desired_width(520.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        clicked = ui.add_enabled(!busy, egui::Button::new("Load")).clicked() || (submitted && !busy);
    });

    if clicked {
        let url = text.clone();
        app.reload(kind, &url);
    }
}
