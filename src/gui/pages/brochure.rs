// src/gui/pages/brochure.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{FilterIndex, Query},
    gui::{app::App, components::sheets},
    runner,
    specs::CatalogLine,
};

use super::Page;

pub struct BrochurePage;
pub static PAGE: BrochurePage = BrochurePage;

impl Page for BrochurePage {
    fn label(&self) -> &'static str { "Brochure" }
    fn kind(&self) -> PageKind { PageKind::Brochure }

    fn facet_labels(&self) -> [&'static str; 2] { ["All collections", "All types"] }

    fn filter_index<'a>(&self, app: &'a App) -> &'a FilterIndex {
        app.brochure.session().index()
    }

    fn load(&self, app: &mut App, text: &str) {
        let records = runner::records_from_text::<CatalogLine>(text, app.state.options.source.delim, None);
        app.brochure.load(records);
    }

    fn apply_query(&self, app: &mut App, query: Query) {
        app.brochure.set_query(query);
    }

    fn status_text(&self, app: &App) -> String {
        app.brochure.view().status_text()
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let view = app.brochure.view();
        sheets::draw(ui, &view);
    }
}
