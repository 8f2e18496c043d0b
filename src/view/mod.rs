// src/view/mod.rs
//
// Pure projections from filtered records to display-ready view models.
// Nothing here knows about HTML or egui; adapters in `render` and `gui`
// consume these types.

pub mod brochure;
pub mod grid;

pub use brochure::{BrochureView, Sheet, TypeBlock};
pub use grid::{Card, GridView};

/// `£12.50`, or empty when there is no price.
pub fn price_label(currency: &str, price: &str) -> String {
    if price.is_empty() { s!() } else { join!(currency, price) }
}
