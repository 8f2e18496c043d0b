// tests/net_status.rs
//
// Fetch path against a one-shot HTTP server on localhost.
use std::{
    fs,
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use reqwest::StatusCode;
use sheet_catalog::{
    config::options::{AppOptions, PageKind},
    core::net::{check_status, http_get},
    error::CatalogError,
    runner::{self, RenderRequest},
};

/// Serve one canned response; the handle yields the request head, lowercased.
fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/export.csv", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        stream.write_all(response.as_bytes()).unwrap();
        head.to_lowercase()
    });
    (url, handle)
}

fn respond(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/export.csv")
}

fn scratch(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("sheet_catalog_net_{}_{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn non_success_is_failed_load() {
    for code in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR, StatusCode::MOVED_PERMANENTLY] {
        let err = check_status(code).unwrap_err();
        assert!(matches!(err, CatalogError::FailedToLoad));
        assert_eq!(err.status_text(), "Error: Failed to load CSV");
    }
    assert!(check_status(StatusCode::OK).is_ok());
}

#[test]
fn get_sends_no_cache_and_returns_body() {
    let (url, server) = serve_once(respond("200 OK", "Title,Image\nSofa,s.jpg\n"));
    let body = http_get(&url).unwrap();
    assert_eq!(body, "Title,Image\nSofa,s.jpg\n");

    let head = server.join().unwrap();
    assert!(head.starts_with("get /export.csv"));
    assert!(head.contains("cache-control: no-cache"));
    assert!(head.contains("pragma: no-cache"));
}

#[test]
fn not_found_renders_error_page_only() {
    let (url, server) = serve_once(respond("404 Not Found", "nope"));
    let dir = scratch("404");
    let out = dir.join("catalog.html");

    let mut opts = AppOptions::default();
    opts.source.set_url(PageKind::Grid, url);
    opts.render.set_out(&out.to_string_lossy());

    let err = runner::run(&opts, &RenderRequest::default(), None).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, CatalogError::FailedToLoad));
    assert!(err.is_load_failure());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<div id=\"meta\">Error: Failed to load CSV</div>"));
    assert!(!html.contains("class=\"card\""));
}

#[test]
fn success_renders_fetched_rows() {
    let (url, server) = serve_once(respond("200 OK", "Title,Image Src\nSofa,https://img/s.jpg\n"));
    let dir = scratch("200");
    let out = dir.join("catalog.html");

    let mut opts = AppOptions::default();
    opts.source.set_url(PageKind::Grid, url);
    opts.render.set_out(&out.to_string_lossy());

    runner::run(&opts, &RenderRequest::default(), None).unwrap();
    server.join().unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<article class=\"card\">").count(), 1);
    assert!(html.contains("1 products • showing 1 on this page"));
}

#[test]
fn brochure_load_uses_brochure_url() {
    let (url, server) = serve_once(respond(
        "200 OK",
        "collection_name,range_name,product_type,size\nNordic,Oslo,Duvet,King\n",
    ));
    let mut opts = AppOptions::default();
    opts.source.set_url(PageKind::Brochure, url);
    // would fail the load if it were used
    opts.source.set_url(PageKind::Grid, closed_port_url());

    let text = runner::load_text(&opts.source, PageKind::Brochure, None).unwrap();
    server.join().unwrap();
    assert!(text.contains("Oslo"));

    opts.render.page = PageKind::Brochure;
    let html = runner::render_brochure_text(&opts, &text, &RenderRequest::default());
    assert!(html.contains("1 lines • 1 ranges"));
}

#[test]
fn closed_port_is_transport_error() {
    let err = http_get(&closed_port_url()).unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
    assert!(err.is_load_failure());
    assert!(err.status_text().starts_with("Error: "));
}

#[test]
fn usage_status_text() {
    let err = CatalogError::usage("Unknown arg: -x");
    assert_eq!(err.status_text(), "Error: Unknown arg: -x");
    assert!(!err.is_load_failure());
}
