// src/view/grid.rs
use crate::config::consts::UNTITLED;
use crate::data::{FilterIndex, FilteredView, Query};
use crate::specs::Product;

use super::price_label;

/// One product card, ready to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub img: String,
    pub alt: String,
    pub desc: String,
    /// Currency-prefixed, or empty.
    pub price: String,
    pub swatch: Option<String>,
    /// External product page; opened in a new context.
    pub link: Option<String>,
}

impl Card {
    pub fn from_product(p: &Product, currency: &str) -> Self {
        Self {
            title: if p.title.is_empty() { s!(UNTITLED) } else { p.title.clone() },
            img: p.img.clone(),
            alt: if p.title.is_empty() { s!("Product") } else { p.title.clone() },
            desc: p.desc.clone(),
            price: price_label(currency, &p.price),
            swatch: (!p.swatch.is_empty()).then(|| p.swatch.clone()),
            link: (!p.url.is_empty()).then(|| p.url.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    pub cards: Vec<Card>,
    /// Matching records across all pages.
    pub total: usize,
    /// 1-based, already clamped.
    pub page: usize,
    pub pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub index: FilterIndex,
    pub query: Query,
}

impl GridView {
    pub fn status_text(&self) -> String {
        format!("{} products • showing {} on this page", self.total, self.cards.len())
    }

    pub fn page_text(&self) -> String {
        format!("Page {} of {}", self.page, self.pages)
    }
}

/// `max(1, ceil(total / size))`. A zero page size is treated as one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// Range of projected positions shown on `page` (1-based, clamped).
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let size = page_size.max(1);
    let page = clamp_page(page, page_count(total, size));
    let start = (page - 1) * size;
    start.min(total)..(start + size).min(total)
}

pub fn project(
    view: &FilteredView<'_, Product>,
    page: usize,
    page_size: usize,
    currency: &str,
    index: &FilterIndex,
    query: &Query,
) -> GridView {
    let total = view.len();
    let pages = page_count(total, page_size);
    let page = clamp_page(page, pages);

    let cards = page_bounds(total, page, page_size)
        .filter_map(|i| view.get(i))
        .map(|p| Card::from_product(p, currency))
        .collect();

    GridView {
        cards,
        total,
        page,
        pages,
        prev_enabled: page > 1,
        next_enabled: page < pages,
        index: index.clone(),
        query: query.clone(),
    }
}
