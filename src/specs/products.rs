// src/specs/products.rs
//
// Grid records. Column names vary between exports, so every field is read
// through an ordered alias list: the first alias with a non-empty value wins.

use crate::core::html::strip_tags;
use crate::csv::RawRow;

use super::Normalize;

pub const TITLE: &[&str] = &["Title", "Product Title", "Name"];
pub const HANDLE: &[&str] = &["Handle", "SKU", "Variant SKU", "Product ID"];
pub const IMAGE: &[&str] = &["Image Src", "Image", "Image URL", "Main Image"];
pub const PRICE: &[&str] = &["Variant Price", "Price"];
pub const TYPE: &[&str] = &["Type", "Product Type", "Category"];
pub const VENDOR: &[&str] = &["Vendor", "Brand"];
pub const TAGS: &[&str] = &["Tags"];
pub const SWATCH: &[&str] = &["Swatch", "Swatch URL", "Swatch Link"];
pub const BODY: &[&str] = &["Body (HTML)", "Description", "Body"];
pub const URL: &[&str] = &["Product URL", "URL", "Link"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Product {
    pub handle: String,
    pub title: String,
    pub img: String,
    pub swatch: String,
    /// Kept as sheet text; the currency prefix is added when rendering.
    pub price: String,
    pub product_type: String,
    pub vendor: String,
    pub tags: String,
    /// Body with markup stripped.
    pub desc: String,
    pub url: String,
}

/// First alias present in `row` with a non-blank value, trimmed.
pub fn pick(row: &RawRow, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| row.get(k).trim())
        .find(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_default()
}

impl Product {
    /// Map a row without applying the keep/drop rule.
    pub fn from_row_lossy(row: &RawRow) -> Self {
        Self {
            handle: pick(row, HANDLE),
            title: pick(row, TITLE),
            img: pick(row, IMAGE),
            swatch: pick(row, SWATCH),
            price: pick(row, PRICE),
            product_type: pick(row, TYPE),
            vendor: pick(row, VENDOR),
            tags: pick(row, TAGS),
            desc: strip_tags(pick(row, BODY)),
            url: pick(row, URL),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.img.is_empty()
    }
}

impl Normalize for Product {
    fn from_row(row: &RawRow) -> Option<Self> {
        let p = Self::from_row_lossy(row);
        p.is_complete().then_some(p)
    }

    /// Only the required fields; reported by their first alias.
    fn missing_columns(headers: &[String]) -> Vec<&'static str> {
        [TITLE, IMAGE]
            .into_iter()
            .filter(|aliases| !aliases.iter().any(|a| headers.iter().any(|h| h == *a)))
            .map(|aliases| aliases[0])
            .collect()
    }
}
