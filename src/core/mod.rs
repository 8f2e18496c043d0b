// src/core/mod.rs

pub mod collate;
pub mod html;
pub mod net;
pub mod sanitize;
