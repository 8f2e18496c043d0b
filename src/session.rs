// src/session.rs
//
// Page controllers. Each owns one load's record set plus the current query
// (and page, for the grid), and changes only through the transitions below:
//
//   unloaded --load--> loaded --set_query / paging--> loaded ...
//
// Every transition recomputes the filtered positions from the full record
// set; views are projected fresh on each call.

use crate::config::options::RenderOptions;
use crate::data::{filter, FilterIndex, FilteredView, Query, Record, RecordSet};
use crate::specs::{CatalogLine, Product};
use crate::view::{self, BrochureView, GridView};

/// State shared by both pages.
#[derive(Clone, Debug)]
pub struct Session<T> {
    set: RecordSet<T>,
    index: FilterIndex,
    query: Query,
    row_ix: Vec<usize>,
    loaded: bool,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self {
            set: RecordSet::new(Vec::new()),
            index: FilterIndex::default(),
            query: Query::default(),
            row_ix: Vec::new(),
            loaded: false,
        }
    }
}

impl<T: Record> Session<T> {
    /// Replace everything with a fresh load. Clears the query.
    pub fn load(&mut self, records: Vec<T>) {
        self.index = FilterIndex::build(&records);
        self.set = RecordSet::new(records);
        self.query = Query::default();
        self.row_ix = (0..self.set.len()).collect();
        self.loaded = true;
        logf!(
            "Session: loaded {} records ({} / {} filter values)",
            self.set.len(),
            self.index.first.len(),
            self.index.second.len()
        );
    }

    pub fn set_query(&mut self, query: Query) {
        self.row_ix = filter(self.set.records(), &query);
        logd!("Session: query {:?} → {} matches", query, self.row_ix.len());
        self.query = query;
    }

    pub fn is_loaded(&self) -> bool { self.loaded }
    pub fn records(&self) -> &RecordSet<T> { &self.set }
    pub fn index(&self) -> &FilterIndex { &self.index }
    pub fn query(&self) -> &Query { &self.query }
    pub fn filtered_len(&self) -> usize { self.row_ix.len() }

    pub fn filtered(&self) -> FilteredView<'_, T> {
        FilteredView::from_indices(&self.set, self.row_ix.clone())
    }
}

/* ---------------- Grid ---------------- */

#[derive(Clone, Debug)]
pub struct GridSession {
    inner: Session<Product>,
    page: usize,
    page_size: usize,
    currency: String,
}

impl GridSession {
    pub fn new(opts: &RenderOptions) -> Self {
        Self {
            inner: Session::default(),
            page: 1,
            page_size: opts.page_size.max(1),
            currency: opts.currency.clone(),
        }
    }

    pub fn load(&mut self, records: Vec<Product>) {
        self.inner.load(records);
        self.page = 1;
    }

    /// Any filter change goes back to page 1.
    pub fn set_query(&mut self, query: Query) {
        self.inner.set_query(query);
        self.page = 1;
    }

    pub fn pages(&self) -> usize {
        view::grid::page_count(self.inner.filtered_len(), self.page_size)
    }

    /// Current page, clamped into `1..=pages`.
    pub fn page(&self) -> usize {
        view::grid::clamp_page(self.page, self.pages())
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = view::grid::clamp_page(page, self.pages());
        logd!("Session: page → {}", self.page);
    }

    pub fn next_page(&mut self) {
        self.go_to(self.page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to(self.page().saturating_sub(1));
    }

    pub fn session(&self) -> &Session<Product> { &self.inner }

    pub fn view(&self) -> GridView {
        view::grid::project(
            &self.inner.filtered(),
            self.page,
            self.page_size,
            &self.currency,
            self.inner.index(),
            self.inner.query(),
        )
    }
}

/* ---------------- Brochure ---------------- */

#[derive(Clone, Debug)]
pub struct BrochureSession {
    inner: Session<CatalogLine>,
    currency: String,
}

impl BrochureSession {
    pub fn new(opts: &RenderOptions) -> Self {
        Self { inner: Session::default(), currency: opts.currency.clone() }
    }

    pub fn load(&mut self, records: Vec<CatalogLine>) {
        self.inner.load(records);
    }

    pub fn set_query(&mut self, query: Query) {
        self.inner.set_query(query);
    }

    pub fn session(&self) -> &Session<CatalogLine> { &self.inner }

    pub fn view(&self) -> BrochureView {
        view::brochure::project(
            &self.inner.filtered(),
            &self.currency,
            self.inner.index(),
            self.inner.query(),
        )
    }
}
