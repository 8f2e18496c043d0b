// tests/runner_local.rs
//
// Full pipeline against local files; no network.
use std::{fs, path::PathBuf};

use sheet_catalog::{
    config::options::{AppOptions, PageKind},
    error::CatalogError,
    progress::NullProgress,
    runner::{self, RenderRequest},
    specs::Product,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sheet_catalog_{}_{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn options(input: PathBuf, out: &PathBuf, page: PageKind) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.source.input = Some(input);
    opts.render.page = page;
    opts.render.set_out(&out.to_string_lossy());
    opts
}

#[test]
fn renders_grid_from_local_export() {
    let dir = scratch("grid");
    let input = dir.join("products.csv");
    fs::write(&input, "Title,Image\nSofa,https://img/s.jpg\n").unwrap();
    let out = dir.join("site").join("catalog.html");

    let opts = options(input, &out, PageKind::Grid);
    let written = runner::run(&opts, &RenderRequest::default(), None).unwrap();
    assert_eq!(written, out);

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("1 products • showing 1 on this page"));
}

#[test]
fn renders_brochure_from_tsv() {
    let dir = scratch("brochure");
    let input = dir.join("lines.tsv");
    fs::write(&input, "range_name\tproduct_type\tsize\nOslo\tDuvet\tKing\n").unwrap();
    let out = dir.join("brochure.html");

    let mut opts = options(input, &out, PageKind::Brochure);
    opts.source.delim = '\t';
    runner::run(&opts, &RenderRequest::default(), None).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<h2 class=\"range\">Oslo</h2>"));
}

#[test]
fn missing_input_writes_error_page() {
    let dir = scratch("missing");
    let out = dir.join("catalog.html");
    let opts = options(dir.join("nope.csv"), &out, PageKind::Grid);

    let err = runner::run(&opts, &RenderRequest::default(), None).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<div id=\"meta\">Error: "));
}

#[test]
fn load_records_and_list_filters() {
    let dir = scratch("filters");
    let input = dir.join("products.csv");
    fs::write(&input, "Title,Image,Type,Vendor\nA,a.jpg,Sofa,Acme\nB,b.jpg,Bed,Acme\n").unwrap();
    let opts = options(input, &dir.join("x.html"), PageKind::Grid);

    let records: Vec<Product> = runner::load_records(&opts.source, PageKind::Grid, Some(&mut NullProgress)).unwrap();
    assert_eq!(records.len(), 2);

    let text = runner::load_text(&opts.source, PageKind::Grid, None).unwrap();
    let (types, vendors) = runner::list_filters(&opts, &text);
    assert_eq!(types, ["Bed", "Sofa"]);
    assert_eq!(vendors, ["Acme"]);
}

#[test]
fn brochure_without_url_is_a_load_failure() {
    let opts = AppOptions::default();
    assert!(!opts.source.grid_url.is_empty());

    let err = runner::load_text(&opts.source, PageKind::Brochure, None).unwrap_err();
    assert!(matches!(err, CatalogError::MissingUrl("brochure")));
    assert!(err.is_load_failure());
    assert_eq!(err.status_text(), "Error: No sheet URL set for the brochure page");
}
