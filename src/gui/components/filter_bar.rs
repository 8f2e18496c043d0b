// src/gui/components/filter_bar.rs
//
// Search box plus the two facet selectors. Edits go into the page's input
// buffer; any change is applied to the session straight away.

use eframe::egui;
use crate::{
    data::Query,
    gui::app::{App, LoadState},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();
    let loaded = app.load_state(kind) == LoadState::Loaded;

    let index = page.filter_index(app).clone();
    let [all_first, all_second] = page.facet_labels();
    let mut input = app.inputs.get(&kind).cloned().unwrap_or_default();
    let before = input.clone();

    ui.add_enabled_ui(loaded, |ui| {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                egui::TextEdit::singleline(&mut input.text)
                    .hint_text("Search…")
                    .desired_width(240.0),
            );

            combo(ui, ("filter_first", kind), all_first, &index.first, &mut input.first);
            combo(ui, ("filter_second", kind), all_second, &index.second, &mut input.second);

            if ui.button("Clear").clicked() {
                input = Query::default();
            }
        });
    });

    if input != before {
        logd!("UI: Query {:?} → {:?}", before, input);
        page.apply_query(app, input.clone());
        app.inputs.insert(kind, input);
    }
}

/// Selector whose first entry (empty value) means "any".
fn combo(
    ui: &mut egui::Ui,
    salt: impl std::hash::Hash,
    all_label: &str,
    values: &[String],
    selected: &mut String,
) {
    let shown = if selected.is_empty() { all_label } else { selected.as_str() };
    egui::ComboBox::from_id_salt(salt)
        .selected_text(shown.to_owned())
        .width(180.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, String::new(), all_label);
            for v in values {
                ui.selectable_value(selected, v.clone(), v.as_str());
            }
        });
}
