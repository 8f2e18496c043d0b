// src/gui/components/product_grid.rs
//
// Card grid for the current page. Images are offered as links rather than
// decoded in-app.

use eframe::egui::{self, RichText};
use crate::view::{grid::Card, GridView};

const CARD_W: f32 = 260.0;

pub fn draw(ui: &mut egui::Ui, view: &GridView) {
    egui::ScrollArea::vertical()
        .id_salt("product_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for card in &view.cards {
                    card_frame(ui, card);
                }
            });
        });
}

fn card_frame(ui: &mut egui::Ui, card: &Card) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(CARD_W);
            ui.vertical(|ui| {
                ui.label(RichText::new(&card.title).strong());
                if !card.desc.is_empty() {
                    ui.label(RichText::new(&card.desc).small());
                }
                if !card.price.is_empty() {
                    ui.label(&card.price);
                }
                ui.horizontal(|ui| {
                    if !card.img.is_empty() {
                        ui.hyperlink_to("Image", &card.img).on_hover_text(&card.alt);
                    }
                    if let Some(swatch) = &card.swatch {
                        ui.hyperlink_to("Swatch", swatch);
                    }
                    if let Some(link) = &card.link {
                        ui.add(egui::Hyperlink::from_label_and_url("View", link).open_in_new_tab(true));
                    }
                });
            });
        });
}
