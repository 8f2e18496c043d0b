// tests/parser.rs
use sheet_catalog::csv::{headers, parse_records, split_line};

#[test]
fn quoted_separator_stays_in_field() {
    let rows = parse_records("a,b,c\n\"1,2\",3\n", ',');
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("a"), "1,2");
    assert_eq!(rows[0].get("b"), "3");
    // short row: missing column reads as empty
    assert_eq!(rows[0].get("c"), "");
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn doubled_quote_inside_quotes_is_literal() {
    assert_eq!(split_line("\"say \"\"hi\"\"\",x", ','), vec!["say \"hi\"", "x"]);
    // outside quotes each quote just toggles
    assert_eq!(split_line("a\"\"b", ','), vec!["ab"]);
}

#[test]
fn unterminated_quote_flushes_rest_of_line() {
    assert_eq!(split_line("\"abc,def", ','), vec!["abc,def"]);
}

#[test]
fn blank_lines_and_carriage_returns_are_ignored() {
    let rows = parse_records("h1,h2\r\n\r\nx,y\r\n\n", ',');
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("h1"), "x");
    assert_eq!(rows[0].get("h2"), "y");
}

#[test]
fn headers_and_cells_are_trimmed() {
    let rows = parse_records(" Title , Image \n  Sofa ,  s.jpg\n", ',');
    assert_eq!(rows[0].get("Title"), "Sofa");
    assert_eq!(rows[0].get("Image"), "s.jpg");
    assert_eq!(headers(" Title , Image \n", ','), vec!["Title", "Image"]);
}

#[test]
fn extra_cells_past_headers_are_dropped() {
    let rows = parse_records("a\n1,2,3\n", ',');
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0].get("a"), "1");
}

#[test]
fn empty_and_header_only_inputs() {
    assert!(parse_records("", ',').is_empty());
    assert!(parse_records("\n\n", ',').is_empty());
    assert!(parse_records("a,b\n", ',').is_empty());
    assert!(headers("", ',').is_empty());
}

#[test]
fn tab_separated() {
    let rows = parse_records("a\tb\n1,5\t2\n", '\t');
    assert_eq!(rows[0].get("a"), "1,5");
    assert_eq!(rows[0].get("b"), "2");
}

#[test]
fn unknown_header_reads_empty() {
    let rows = parse_records("a\n1\n", ',');
    assert_eq!(rows[0].get("zzz"), "");
    assert_eq!(rows[0].len(), 1);
}
