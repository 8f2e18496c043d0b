//! # Sheet "specs" module
//!
//! One spec per page variant. A spec knows which sheet columns feed which
//! record field, which defaults apply when a column is absent or unusable,
//! and which minimum fields a row needs to be kept at all.
//!
//! ## What lives here
//! - **Header mapping**: alias lists for the grid (Shopify-style exports and
//!   hand-made sheets), a fixed column set for the brochure.
//! - **Coercion with fallback**: numeric order columns, `|`-separated URL
//!   lists, HTML-stripped descriptions.
//! - **The keep/drop rule** for each record type.
//!
//! ## What does **not** live here
//! - Fetching and CSV splitting (`core::net`, `csv`).
//! - Filtering, grouping, pagination (`data`, `view`).
//!
//! Nothing in a spec fails: a row either normalizes or is dropped silently.

use crate::csv::RawRow;

pub mod catalog;
pub mod products;

pub use catalog::CatalogLine;
pub use products::Product;

pub trait Normalize: Sized {
    /// `None` when the row misses a required field.
    fn from_row(row: &RawRow) -> Option<Self>;

    /// Expected columns absent from `headers`. A sheet missing a required
    /// one normalizes to nothing.
    fn missing_columns(_headers: &[String]) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Normalize every row, keeping input order and dropping the rejects.
pub fn normalize_all<T: Normalize>(rows: &[RawRow]) -> Vec<T> {
    let kept: Vec<T> = rows.iter().filter_map(T::from_row).collect();
    logd!("Specs: kept {} of {} rows", kept.len(), rows.len());
    kept
}
