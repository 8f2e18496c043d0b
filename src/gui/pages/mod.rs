// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{FilterIndex, Query},
    gui::app::App,
};

pub mod brochure;
pub mod grid;

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Wildcard captions for the two filter selectors.
    fn facet_labels(&self) -> [&'static str; 2];

    /// Selector options for this page's loaded records.
    fn filter_index<'a>(&self, app: &'a App) -> &'a FilterIndex;

    /// Normalize freshly loaded export text into this page's session.
    fn load(&self, app: &mut App, text: &str);

    /// Re-filter from the full record set.
    fn apply_query(&self, app: &mut App, query: Query);

    /// Status line for a loaded page.
    fn status_text(&self, app: &App) -> String;

    /// Draw the page body below the filter bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
