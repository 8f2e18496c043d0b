// src/gui/components/sheets.rs
//
// One framed block per range: header, colour line, then a size / carton /
// price table for each product type.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::view::{
    brochure::{Sheet, TypeBlock},
    BrochureView,
};

pub fn draw(ui: &mut egui::Ui, view: &BrochureView) {
    egui::ScrollArea::vertical()
        .id_salt("brochure_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (si, sheet) in view.sheets.iter().enumerate() {
                sheet_frame(ui, si, sheet);
                ui.add_space(12.0);
            }
        });
}

fn sheet_frame(ui: &mut egui::Ui, si: usize, sheet: &Sheet) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&sheet.collection_name).small().weak());
            ui.heading(&sheet.range_name);

            ui.horizontal(|ui| {
                if !sheet.hero_image_url.is_empty() {
                    ui.hyperlink_to("Hero image", &sheet.hero_image_url);
                }
                if !sheet.texture_image_url.is_empty() {
                    ui.hyperlink_to("Texture", &sheet.texture_image_url);
                }
                for (i, url) in sheet.swatches.iter().enumerate() {
                    ui.hyperlink_to(format!("Swatch {}", i + 1), url);
                }
            });

            if !sheet.colours.is_empty() {
                ui.label(format!("Colours: {}", sheet.colours));
            }

            for (bi, block) in sheet.blocks.iter().enumerate() {
                ui.add_space(6.0);
                type_table(ui, (si, bi), block);
            }

            if !sheet.thumbs.is_empty() {
                ui.horizontal(|ui| {
                    for (i, url) in sheet.thumbs.iter().enumerate() {
                        ui.hyperlink_to(format!("Photo {}", i + 1), url);
                    }
                });
            }
        });
}

fn type_table(ui: &mut egui::Ui, salt: (usize, usize), block: &TypeBlock) {
    ui.label(RichText::new(&block.product_type).strong());
    TableBuilder::new(ui)
        .id_salt(("type_table", salt))
        .striped(true)
        .vscroll(false)
        .column(Column::initial(160.0).at_least(60.0))
        .column(Column::initial(100.0).at_least(40.0))
        .column(Column::remainder().at_least(60.0))
        .header(20.0, |mut header| {
            for title in ["Size", "Carton qty", "Price"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for row in &block.rows {
                body.row(18.0, |mut r| {
                    r.col(|ui| { ui.label(&row.size); });
                    r.col(|ui| { ui.label(&row.carton_qty); });
                    r.col(|ui| { ui.label(&row.price); });
                });
            }
        });
}
