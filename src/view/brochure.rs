// src/view/brochure.rs
//
// Two-level grouping for the brochure:
//   range_name  → one Sheet, ordered by the first line of each range
//   product_type → one TypeBlock per sheet, rows ordered by size priority
//
// Footer counts come from the same grouping that produces the sheets, so
// "N ranges" always equals the number of sheets drawn.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::consts::SIZE_ORDER;
use crate::core::collate::locale_cmp;
use crate::data::{FilterIndex, FilteredView, Query};
use crate::specs::CatalogLine;

use super::price_label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRow {
    pub size: String,
    pub carton_qty: String,
    /// Currency-prefixed, or empty.
    pub price: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeBlock {
    pub product_type: String,
    pub rows: Vec<TypeRow>,
}

/// One range. Shared header fields come from the range's first line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub collection_name: String,
    pub range_name: String,
    pub hero_image_url: String,
    pub texture_image_url: String,
    pub swatches: Vec<String>,
    pub colours: String,
    pub blocks: Vec<TypeBlock>,
    pub thumbs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrochureView {
    pub sheets: Vec<Sheet>,
    /// Filtered line count.
    pub lines: usize,
    /// Distinct ranges among the filtered lines.
    pub ranges: usize,
    pub index: FilterIndex,
    pub query: Query,
}

impl BrochureView {
    pub fn status_text(&self) -> String {
        format!("{} lines • {} ranges", self.lines, self.ranges)
    }
}

/// Group by `key`, keeping first-appearance order of groups and input order
/// within each group.
pub fn group_by<'a, T, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> Vec<Vec<&'a T>>
where
    T: 'a,
    F: Fn(&T) -> &str,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&'a T>> = Vec::new();
    for item in items {
        let k = key(item);
        match slots.get(k) {
            Some(&ix) => groups[ix].push(item),
            None => {
                slots.insert(s!(k), groups.len());
                groups.push(vec![item]);
            }
        }
    }
    groups
}

/// collection_order, collection_name, range_order, range_name.
pub fn range_cmp(a: &CatalogLine, b: &CatalogLine) -> Ordering {
    a.collection_order
        .cmp(&b.collection_order)
        .then_with(|| locale_cmp(&a.collection_name, &b.collection_name))
        .then_with(|| a.range_order.cmp(&b.range_order))
        .then_with(|| locale_cmp(&a.range_name, &b.range_name))
}

/// Listed sizes by list position; anything else after them, alphabetically.
pub fn size_cmp(a: &str, b: &str) -> Ordering {
    let rank = |s: &str| SIZE_ORDER.iter().position(|x| *x == s).unwrap_or(SIZE_ORDER.len());
    let (ra, rb) = (rank(a), rank(b));
    match ra.cmp(&rb) {
        Ordering::Equal if ra == SIZE_ORDER.len() => locale_cmp(a, b),
        other => other,
    }
}

/// Ranges sorted for display. Each inner vec is one range, input order.
pub fn sorted_ranges<'a>(lines: impl IntoIterator<Item = &'a CatalogLine>) -> Vec<Vec<&'a CatalogLine>> {
    let mut groups = group_by(lines, |l| l.range_name.as_str());
    groups.sort_by(|a, b| range_cmp(a[0], b[0]));
    groups
}

fn type_blocks(range: &[&CatalogLine], currency: &str) -> Vec<TypeBlock> {
    group_by(range.iter().copied(), |l| l.product_type.as_str())
        .into_iter()
        .map(|mut lines| {
            lines.sort_by(|a, b| size_cmp(&a.size, &b.size));
            TypeBlock {
                product_type: lines[0].product_type.clone(),
                rows: lines
                    .iter()
                    .map(|l| TypeRow {
                        size: l.size.clone(),
                        carton_qty: l.carton_qty.clone(),
                        price: price_label(currency, &l.price_unit),
                    })
                    .collect(),
            }
        })
        .collect()
}

fn sheet(range: &[&CatalogLine], currency: &str) -> Sheet {
    let first = range[0];
    Sheet {
        collection_name: first.collection_name.clone(),
        range_name: first.range_name.clone(),
        hero_image_url: first.hero_image_url.clone(),
        texture_image_url: first.texture_image_url.clone(),
        swatches: first.swatches.clone(),
        colours: first.colours_line(),
        blocks: type_blocks(range, currency),
        thumbs: first.thumbs.clone(),
    }
}

pub fn project(
    view: &FilteredView<'_, CatalogLine>,
    currency: &str,
    index: &FilterIndex,
    query: &Query,
) -> BrochureView {
    let ranges = sorted_ranges(view.iter());
    let sheets: Vec<Sheet> = ranges.iter().map(|r| sheet(r, currency)).collect();

    BrochureView {
        lines: view.len(),
        ranges: sheets.len(),
        sheets,
        index: index.clone(),
        query: query.clone(),
    }
}
