// tests/normalize.rs
use sheet_catalog::{
    csv::{parse_records, RawRow},
    specs::{catalog::parse_order, normalize_all, CatalogLine, Normalize, Product},
};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs.iter().copied().collect()
}

#[test]
fn product_from_alias_columns() {
    let p = Product::from_row(&row(&[("Product Title", "Sofa"), ("Image URL", "https://x/s.jpg")]))
        .expect("title + image is enough");
    assert_eq!(p.title, "Sofa");
    assert_eq!(p.img, "https://x/s.jpg");
    assert_eq!(p.price, "");
    assert_eq!(p.vendor, "");
    assert_eq!(p.url, "");
}

#[test]
fn first_non_blank_alias_wins() {
    let p = Product::from_row(&row(&[
        ("Title", "  "),
        ("Product Title", "Chair"),
        ("Image Src", "a.jpg"),
        ("Image", "b.jpg"),
        ("Vendor", ""),
        ("Brand", "Acme"),
    ]))
    .unwrap();
    assert_eq!(p.title, "Chair");
    assert_eq!(p.img, "a.jpg");
    assert_eq!(p.vendor, "Acme");
}

#[test]
fn product_without_image_or_title_is_dropped() {
    assert!(Product::from_row(&row(&[("Title", "Sofa")])).is_none());
    assert!(Product::from_row(&row(&[("Image", "a.jpg")])).is_none());
}

#[test]
fn body_html_is_stripped() {
    let p = Product::from_row(&row(&[
        ("Title", "Sofa"),
        ("Image", "a.jpg"),
        ("Body (HTML)", "<p>Soft  <b>cotton</b></p>\n"),
    ]))
    .unwrap();
    assert_eq!(p.desc, "Soft cotton");
}

#[test]
fn normalize_all_keeps_input_order() {
    let text = "Title,Image\nB,b.jpg\n,missing.jpg\nA,a.jpg\n";
    let products: Vec<Product> = normalize_all(&parse_records(text, ','));
    let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["B", "A"]);
}

#[test]
fn order_parsing_falls_back_to_sentinel() {
    assert_eq!(parse_order("3"), 3);
    assert_eq!(parse_order(" 2.0 "), 2);
    assert_eq!(parse_order(""), 9999);
    assert_eq!(parse_order("first"), 9999);
    assert_eq!(parse_order("1.5"), 9999);
}

#[test]
fn catalog_line_lists_and_thumbs() {
    let text = "\
collection_name,collection_order,range_name,range_order,collection_colours,swatch_urls,product_type,size,thumb_1,thumb_2
Nordic,,Oslo,x,Red | Blue||Green,s1.jpg|s2.jpg,Duvet,King,,t2.jpg
";
    let lines: Vec<CatalogLine> = normalize_all(&parse_records(text, ','));
    assert_eq!(lines.len(), 1);
    let l = &lines[0];
    assert_eq!(l.collection_order, 9999);
    assert_eq!(l.range_order, 9999);
    assert_eq!(l.collection_colours, ["Red", "Blue", "Green"]);
    assert_eq!(l.colours_line(), "Red, Blue, Green");
    assert_eq!(l.swatches, ["s1.jpg", "s2.jpg"]);
    assert_eq!(l.thumbs, ["t2.jpg"]);
    assert_eq!(l.hero_image_url, "");
}

#[test]
fn catalog_line_needs_range_and_type() {
    assert!(CatalogLine::from_row(&row(&[("range_name", "Oslo")])).is_none());
    assert!(CatalogLine::from_row(&row(&[("product_type", "Duvet")])).is_none());
    assert!(CatalogLine::from_row(&row(&[("range_name", "Oslo"), ("product_type", "Duvet")])).is_some());
}

#[test]
fn missing_required_columns_are_reported() {
    let headers = |h: &[&str]| h.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert!(Product::missing_columns(&headers(&["Product Title", "Main Image"])).is_empty());
    assert_eq!(Product::missing_columns(&headers(&["Name", "Price"])), ["Image Src"]);

    // a product export read as a brochure lacks every brochure column
    let missing = CatalogLine::missing_columns(&headers(&["Title", "Image Src"]));
    assert!(missing.contains(&"range_name"));
    assert!(missing.contains(&"product_type"));
    assert!(!CatalogLine::missing_columns(&headers(&["range_name", "product_type"])).contains(&"range_name"));
}
