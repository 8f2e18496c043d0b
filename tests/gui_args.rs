// tests/gui_args.rs
use std::path::PathBuf;

use sheet_catalog::{config::options::PageKind, error::CatalogError, gui::args::parse_args};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_open_on_grid() {
    let state = parse_args(args(&[])).unwrap();
    assert_eq!(state.options.render.page, PageKind::Grid);
    assert_eq!(state.options.source.url_for(PageKind::Brochure), "");
}

#[test]
fn each_page_gets_its_own_url() {
    let state = parse_args(args(&[
        "brochure",
        "--brochure-url", "http://sheets/brochure.csv",
        "--grid-url", "http://sheets/products.csv",
    ]))
    .unwrap();
    let source = &state.options.source;
    assert_eq!(state.options.render.page, PageKind::Brochure);
    assert_eq!(source.url_for(PageKind::Brochure), "http://sheets/brochure.csv");
    assert_eq!(source.url_for(PageKind::Grid), "http://sheets/products.csv");
    assert_eq!(source.describe(PageKind::Brochure), "http://sheets/brochure.csv");
}

#[test]
fn local_input_and_tsv() {
    let state = parse_args(args(&["--input", "lines.tsv", "--tsv"])).unwrap();
    assert_eq!(state.options.source.input, Some(PathBuf::from("lines.tsv")));
    assert_eq!(state.options.source.delim, '\t');
    assert_eq!(state.options.source.describe(PageKind::Grid), "lines.tsv");
}

#[test]
fn unknown_args_are_rejected() {
    assert!(matches!(parse_args(args(&["gallery"])), Err(CatalogError::Usage(_))));
    assert!(matches!(parse_args(args(&["--brochure-url"])), Err(CatalogError::Usage(_))));
}
