// src/gui/mod.rs
pub mod app;
pub mod args;
pub mod components;
pub mod pages;
pub mod progress;
pub mod router;

pub use app::run;
