// src/render/mod.rs
//
// HTML adapter: view models → one static, self-contained page.
// The element ids and classes match what the hosted pages use, so the
// generated file can be dropped in their place.

use std::fmt::Write as _;

use crate::config::options::PageKind;
use crate::core::html::escape;

pub mod brochure;
pub mod grid;

pub use brochure::render_brochure;
pub use grid::render_grid;

const BASE_CSS: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f6f6f4;color:#111}\
header.bar{display:flex;gap:8px;padding:12px;background:#fff;border-bottom:1px solid #ddd}\
#meta{padding:8px 12px;color:#555;font-size:14px}\
img{max-width:100%;display:block}";

fn document(title: &str, extra_css: &str, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 1024);
    let _ = write!(
        out,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{}</title>\n<style>{}{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        BASE_CSS,
        extra_css,
        body
    );
    out
}

/// `<select>` with an "All …" wildcard followed by the index values.
fn select(id: &str, all_label: &str, values: &[String], selected: &str) -> String {
    let mut out = format!("<select id=\"{}\">\n<option value=\"\">{}</option>\n", id, escape(all_label));
    for v in values {
        let sel = if v == selected { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{0}\"{1}>{0}</option>", escape(v), sel);
    }
    out.push_str("</select>\n");
    out
}

fn search_box(value: &str) -> String {
    format!(
        "<input id=\"q\" type=\"search\" placeholder=\"Search\" value=\"{}\">\n",
        escape(value)
    )
}

fn lazy_img(class: &str, src: &str, alt: &str) -> String {
    format!(
        "<img class=\"{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\" referrerpolicy=\"no-referrer\">",
        class,
        escape(src),
        escape(alt)
    )
}

/// Page for a failed load: the status line carries the error, nothing else
/// is populated.
pub fn render_error(kind: PageKind, status: &str) -> String {
    let (title, container) = match kind {
        PageKind::Grid => ("Catalog", "<main id=\"grid\"></main>\n"),
        PageKind::Brochure => ("Brochure", "<main id=\"sheets\"></main>\n"),
    };
    let body = join!("<div id=\"meta\">", &escape(status), "</div>\n", container);
    document(title, "", &body)
}
