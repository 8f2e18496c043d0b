// src/gui/components/mod.rs
pub mod filter_bar;
pub mod pager;
pub mod product_grid;
pub mod sheets;
pub mod source_bar;
pub mod status_bar;
pub mod tabs;
