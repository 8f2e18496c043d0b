// src/data.rs
//
// Canonical records and derived views.
//
// - RecordSet: read-only holder for one load's normalized records.
//              Built once; never mutated record-by-record.
// - FilterIndex: sorted distinct values for the two categorical fields.
// - Query / FilteredView: the current predicates and the positions of the
//              matching records, in input order.

use crate::core::collate::sorted_unique;
use crate::specs::{CatalogLine, Product};

/// What the query engine needs from a record type.
pub trait Record {
    /// Labels of the two categorical fields, for selector captions.
    const FACETS: [&'static str; 2];

    /// Values of the two categorical fields.
    fn facets(&self) -> [&str; 2];

    /// Space-joined, lower-cased text the free-text query searches.
    fn haystack(&self) -> String;
}

impl Record for Product {
    const FACETS: [&'static str; 2] = ["Type", "Vendor"];

    fn facets(&self) -> [&str; 2] {
        [&self.product_type, &self.vendor]
    }

    fn haystack(&self) -> String {
        [&self.title, &self.handle, &self.product_type, &self.vendor, &self.tags, &self.desc]
            .map(|s| s.as_str())
            .join(" ")
            .to_lowercase()
    }
}

impl Record for CatalogLine {
    const FACETS: [&'static str; 2] = ["Collection", "Product type"];

    fn facets(&self) -> [&str; 2] {
        [&self.collection_name, &self.product_type]
    }

    fn haystack(&self) -> String {
        let colours = self.colours_line();
        [
            self.collection_name.as_str(),
            self.range_name.as_str(),
            self.product_type.as_str(),
            self.size.as_str(),
            colours.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Authoritative record set for one load.
#[derive(Clone, Debug, Default)]
pub struct RecordSet<T> {
    records: Vec<T>,
}

impl<T> RecordSet<T> {
    pub fn new(records: Vec<T>) -> Self { Self { records } }

    /// Read-only view of the records, in parse order.
    pub fn records(&self) -> &[T] { &self.records }

    pub fn get(&self, ix: usize) -> Option<&T> { self.records.get(ix) }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// Selector options: sorted distinct non-empty values per facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterIndex {
    pub first: Vec<String>,
    pub second: Vec<String>,
}

impl FilterIndex {
    pub fn build<T: Record>(records: &[T]) -> Self {
        Self {
            first: sorted_unique(records.iter().map(|r| s!(r.facets()[0]))),
            second: sorted_unique(records.iter().map(|r| s!(r.facets()[1]))),
        }
    }
}

/// Active predicates. Empty strings are wildcards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub first: String,
    pub second: String,
}

impl Query {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn is_identity(&self) -> bool {
        self.text.trim().is_empty() && self.first.is_empty() && self.second.is_empty()
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        let [a, b] = record.facets();
        if !self.first.is_empty() && a != self.first { return false; }
        if !self.second.is_empty() && b != self.second { return false; }

        let needle = self.text.trim().to_lowercase();
        needle.is_empty() || record.haystack().contains(&needle)
    }
}

/// Positions of matching records, in input order.
pub fn filter<T: Record>(records: &[T], query: &Query) -> Vec<usize> {
    if query.is_identity() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| query.matches(*r))
        .map(|(i, _)| i)
        .collect()
}

/// Zero-copy filtered view. Holds row positions into a RecordSet.
#[derive(Clone, Debug)]
pub struct FilteredView<'a, T> {
    pub row_ix: Vec<usize>,
    set: &'a RecordSet<T>,
}

impl<'a, T: Record> FilteredView<'a, T> {
    pub fn from_query(set: &'a RecordSet<T>, query: &Query) -> Self {
        Self { row_ix: filter(set.records(), query), set }
    }
}

impl<'a, T> FilteredView<'a, T> {
    /// Build a view directly from precomputed positions.
    pub fn from_indices(set: &'a RecordSet<T>, row_ix: Vec<usize>) -> Self {
        Self { row_ix, set }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a record by projected position.
    pub fn get(&self, i: usize) -> Option<&'a T> {
        self.row_ix.get(i).and_then(|&ix| self.set.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.set.get(ix))
    }
}
