// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod specs;
pub mod view;

pub mod file;
pub mod gui;
pub mod progress;
pub mod render;
pub mod runner;
pub mod session;

pub use error::{CatalogError, Result};
