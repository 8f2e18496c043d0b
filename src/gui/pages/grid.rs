// src/gui/pages/grid.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{FilterIndex, Query},
    gui::{app::App, components::{pager, product_grid}},
    runner,
    specs::Product,
};

use super::Page;

pub struct GridPage;
pub static PAGE: GridPage = GridPage;

impl Page for GridPage {
    fn label(&self) -> &'static str { "Products" }
    fn kind(&self) -> PageKind { PageKind::Grid }

    fn facet_labels(&self) -> [&'static str; 2] { ["All types", "All vendors"] }

    fn filter_index<'a>(&self, app: &'a App) -> &'a FilterIndex {
        app.grid.session().index()
    }

    fn load(&self, app: &mut App, text: &str) {
        let records = runner::records_from_text::<Product>(text, app.state.options.source.delim, None);
        app.grid.load(records);
    }

    fn apply_query(&self, app: &mut App, query: Query) {
        app.grid.set_query(query);
    }

    fn status_text(&self, app: &App) -> String {
        app.grid.view().status_text()
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let view = app.grid.view();

        egui::TopBottomPanel::bottom("grid_pager")
            .show_inside(ui, |ui| pager::draw(ui, app, &view));

        egui::CentralPanel::default().show_inside(ui, |ui| {
            product_grid::draw(ui, &view);
        });
    }
}
