// src/config/consts.rs

// Source
/// Published export of the product sheet.
pub const GRID_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQx5Jg1cLHd5ubW2idSU1NtySJbu1VdaJL7BLusCEY0vBEsimWBQUWSed804Jb1S-ihcxlgJvffb1on/pub?gid=0&single=true&output=csv";
/// No published brochure export ships with the app; it has to be supplied
/// (`--brochure-url`, or the source bar in the GUI).
pub const BROCHURE_SHEET_CSV_URL: &str = "";
pub const USER_AGENT: &str = "sheet_catalog/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DELIM: char = ',';

// Grid
pub const PAGE_SIZE: usize = 24;
pub const CURRENCY: &str = "£";
pub const UNTITLED: &str = "(Untitled)";

// Brochure
/// Order value for rows with no usable order; sorts after every real order.
pub const ORDER_SENTINEL: i64 = 9999;
pub const SIZE_ORDER: &[&str] = &["Single", "Double", "King", "Super King"];
pub const LIST_SEP: char = '|';

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_GRID_FILE: &str = "catalog";
pub const DEFAULT_BROCHURE_FILE: &str = "brochure";
