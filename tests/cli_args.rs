// tests/cli_args.rs
use std::path::PathBuf;

use sheet_catalog::{
    cli::{parse_args, Command},
    config::options::PageKind,
    error::CatalogError,
};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_render_grid() {
    let Command::Render(opts, req) = parse_args(args(&[])).unwrap() else {
        panic!("expected render");
    };
    assert_eq!(opts.render.page, PageKind::Grid);
    assert_eq!(opts.render.page_size, 24);
    assert_eq!(opts.source.delim, ',');
    assert_eq!(req.page_no, 1);
    assert_eq!(opts.render.out_path(), PathBuf::from("out").join("catalog.html"));
}

#[test]
fn brochure_facets_map_to_collection_and_type() {
    let cmd = parse_args(args(&[
        "--page", "brochure", "--collection", "Nordic", "--type", "Duvet", "-q", "oslo",
    ]))
    .unwrap();
    let Command::Render(opts, req) = cmd else { panic!("expected render") };
    assert_eq!(opts.render.page, PageKind::Brochure);
    assert_eq!(req.query.first, "Nordic");
    assert_eq!(req.query.second, "Duvet");
    assert_eq!(req.query.text, "oslo");
    assert_eq!(opts.render.out_path(), PathBuf::from("out").join("brochure.html"));
}

#[test]
fn grid_facets_map_to_type_and_vendor() {
    let cmd = parse_args(args(&["--product-type", "Bed", "--vendor", "Acme", "--page-no", "3", "--tsv"])).unwrap();
    let Command::Render(opts, req) = cmd else { panic!("expected render") };
    assert_eq!(req.query.first, "Bed");
    assert_eq!(req.query.second, "Acme");
    assert_eq!(req.page_no, 3);
    assert_eq!(opts.source.delim, '\t');
}

#[test]
fn facet_for_the_other_page_is_rejected() {
    assert!(matches!(parse_args(args(&["--collection", "Nordic"])), Err(CatalogError::Usage(_))));
    assert!(matches!(
        parse_args(args(&["--page", "brochure", "--vendor", "Acme"])),
        Err(CatalogError::Usage(_))
    ));
}

#[test]
fn bad_values_are_usage_errors() {
    assert!(matches!(parse_args(args(&["--page-no", "0"])), Err(CatalogError::Usage(_))));
    assert!(matches!(parse_args(args(&["--page-size", "abc"])), Err(CatalogError::Usage(_))));
    assert!(matches!(parse_args(args(&["--page", "nope"])), Err(CatalogError::Usage(_))));
    assert!(matches!(parse_args(args(&["--url"])), Err(CatalogError::Usage(_))));
    assert!(matches!(parse_args(args(&["--bogus"])), Err(CatalogError::Usage(_))));
}

#[test]
fn page_no_is_grid_only() {
    assert!(matches!(
        parse_args(args(&["--page", "brochure", "--page-no", "2"])),
        Err(CatalogError::Usage(_))
    ));
    let Command::Render(_, req) = parse_args(args(&["--page-no", "2"])).unwrap() else {
        panic!("expected render");
    };
    assert_eq!(req.page_no, 2);
}

#[test]
fn url_applies_to_the_chosen_page() {
    let cmd = parse_args(args(&["--url", "http://b/export.csv", "--page", "brochure"])).unwrap();
    let Command::Render(opts, _) = cmd else { panic!("expected render") };
    assert_eq!(opts.source.url_for(PageKind::Brochure), "http://b/export.csv");
    assert_ne!(opts.source.url_for(PageKind::Grid), "http://b/export.csv");

    let cmd = parse_args(args(&["--grid-url", "http://g", "--brochure-url", "http://b"])).unwrap();
    let Command::Render(opts, _) = cmd else { panic!("expected render") };
    assert_eq!(opts.source.url_for(PageKind::Grid), "http://g");
    assert_eq!(opts.source.url_for(PageKind::Brochure), "http://b");
}

#[test]
fn out_directory_hint_gets_page_file_name() {
    let cmd = parse_args(args(&["-o", "site/", "--page", "brochure"])).unwrap();
    let Command::Render(opts, _) = cmd else { panic!("expected render") };
    assert_eq!(opts.render.out_path(), PathBuf::from("site").join("brochure.html"));
}

#[test]
fn help_and_list_filters() {
    assert!(matches!(parse_args(args(&["-h"])), Ok(Command::Help)));
    assert!(matches!(parse_args(args(&["--list-filters"])), Ok(Command::ListFilters(_))));
}
