// src/specs/catalog.rs
//
// Brochure records. Fixed column names, no aliasing.
//
// | column               | field               | shape                         |
// |----------------------|---------------------|-------------------------------|
// | collection_name      | collection_name     | text                          |
// | collection_order     | collection_order    | integer, 9999 if unusable     |
// | range_name           | range_name          | text (required)               |
// | range_order          | range_order         | integer, 9999 if unusable     |
// | collection_colours   | collection_colours  | `|` list                      |
// | hero_image_url       | hero_image_url      | url                           |
// | texture_image_url    | texture_image_url   | url                           |
// | swatch_urls          | swatches            | `|` list of urls              |
// | product_type         | product_type        | text (required)               |
// | size                 | size                | text                          |
// | carton_qty           | carton_qty          | text                          |
// | price_unit           | price_unit          | text                          |
// | thumb_1, thumb_2     | thumbs              | up to two urls                |

use crate::config::consts::{LIST_SEP, ORDER_SENTINEL};
use crate::core::sanitize::{non_empty, split_list};
use crate::csv::RawRow;

use super::Normalize;

pub mod col {
    pub const COLLECTION_NAME: &str = "collection_name";
    pub const COLLECTION_ORDER: &str = "collection_order";
    pub const RANGE_NAME: &str = "range_name";
    pub const RANGE_ORDER: &str = "range_order";
    pub const COLLECTION_COLOURS: &str = "collection_colours";
    pub const HERO_IMAGE_URL: &str = "hero_image_url";
    pub const TEXTURE_IMAGE_URL: &str = "texture_image_url";
    pub const SWATCH_URLS: &str = "swatch_urls";
    pub const PRODUCT_TYPE: &str = "product_type";
    pub const SIZE: &str = "size";
    pub const CARTON_QTY: &str = "carton_qty";
    pub const PRICE_UNIT: &str = "price_unit";
    pub const THUMB_1: &str = "thumb_1";
    pub const THUMB_2: &str = "thumb_2";

    pub const ALL: &[&str] = &[
        COLLECTION_NAME, COLLECTION_ORDER, RANGE_NAME, RANGE_ORDER, COLLECTION_COLOURS,
        HERO_IMAGE_URL, TEXTURE_IMAGE_URL, SWATCH_URLS, PRODUCT_TYPE, SIZE, CARTON_QTY,
        PRICE_UNIT, THUMB_1, THUMB_2,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogLine {
    pub collection_name: String,
    pub collection_order: i64,
    pub range_name: String,
    pub range_order: i64,
    pub collection_colours: Vec<String>,
    pub hero_image_url: String,
    pub texture_image_url: String,
    pub product_type: String,
    pub size: String,
    pub carton_qty: String,
    pub price_unit: String,
    pub swatches: Vec<String>,
    pub thumbs: Vec<String>,
}

impl Default for CatalogLine {
    fn default() -> Self {
        Self {
            collection_name: s!(),
            collection_order: ORDER_SENTINEL,
            range_name: s!(),
            range_order: ORDER_SENTINEL,
            collection_colours: Vec::new(),
            hero_image_url: s!(),
            texture_image_url: s!(),
            product_type: s!(),
            size: s!(),
            carton_qty: s!(),
            price_unit: s!(),
            swatches: Vec::new(),
            thumbs: Vec::new(),
        }
    }
}

/// Integer order, or `ORDER_SENTINEL` for blank/non-numeric cells.
/// Whole-valued decimals such as `2.0` count as numbers.
pub fn parse_order(s: &str) -> i64 {
    let t = s.trim();
    if let Ok(n) = t.parse::<i64>() {
        return n;
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
        _ => ORDER_SENTINEL,
    }
}

fn text(row: &RawRow, column: &str) -> String {
    s!(row.get(column).trim())
}

impl CatalogLine {
    pub fn from_row_lossy(row: &RawRow) -> Self {
        Self {
            collection_name: text(row, col::COLLECTION_NAME),
            collection_order: parse_order(row.get(col::COLLECTION_ORDER)),
            range_name: text(row, col::RANGE_NAME),
            range_order: parse_order(row.get(col::RANGE_ORDER)),
            collection_colours: split_list(row.get(col::COLLECTION_COLOURS), LIST_SEP),
            hero_image_url: text(row, col::HERO_IMAGE_URL),
            texture_image_url: text(row, col::TEXTURE_IMAGE_URL),
            product_type: text(row, col::PRODUCT_TYPE),
            size: text(row, col::SIZE),
            carton_qty: text(row, col::CARTON_QTY),
            price_unit: text(row, col::PRICE_UNIT),
            swatches: split_list(row.get(col::SWATCH_URLS), LIST_SEP),
            thumbs: non_empty([row.get(col::THUMB_1), row.get(col::THUMB_2)]),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.range_name.is_empty() && !self.product_type.is_empty()
    }

    pub fn colours_line(&self) -> String {
        self.collection_colours.join(", ")
    }
}

impl Normalize for CatalogLine {
    fn from_row(row: &RawRow) -> Option<Self> {
        let line = Self::from_row_lossy(row);
        line.is_complete().then_some(line)
    }

    fn missing_columns(headers: &[String]) -> Vec<&'static str> {
        col::ALL.iter().copied().filter(|c| !headers.iter().any(|h| h == c)).collect()
    }
}
