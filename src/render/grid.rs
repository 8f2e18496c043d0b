// src/render/grid.rs
use std::fmt::Write as _;

use crate::core::html::escape;
use crate::view::{Card, GridView};

use super::{document, lazy_img, search_box, select};

const GRID_CSS: &str = "\
#grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:14px;padding:12px}\
.card{background:#fff;border:1px solid #e3e3e3;border-radius:10px;overflow:hidden}\
.card>img{aspect-ratio:1;object-fit:cover;width:100%}\
.pad{padding:10px}.title{font-weight:650}.desc{font-size:13px;color:#555;margin:6px 0}\
.row{display:flex;align-items:center;gap:8px}.price{font-weight:650}\
.swatch{width:22px;height:22px;border-radius:50%;object-fit:cover}\
.row a{margin-left:auto;text-decoration:none;color:#111;font-weight:650}\
nav.pager{display:flex;gap:12px;align-items:center;justify-content:center;padding:16px}";

fn card(c: &Card) -> String {
    let mut out = s!("<article class=\"card\">\n");
    let _ = writeln!(out, "{}", lazy_img("img", &c.img, &c.alt));
    out.push_str("<div class=\"pad\">\n");
    let _ = writeln!(out, "<div class=\"title\">{}</div>", escape(&c.title));
    let _ = writeln!(out, "<div class=\"desc\">{}</div>", escape(&c.desc));
    out.push_str("<div class=\"row\">");
    let _ = write!(out, "<div class=\"price\">{}</div>", escape(&c.price));
    if let Some(sw) = &c.swatch {
        out.push_str(&lazy_img("swatch", sw, "Swatch"));
    }
    if let Some(url) = &c.link {
        let _ = write!(out, "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">View</a>", escape(url));
    }
    out.push_str("</div>\n</div>\n</article>\n");
    out
}

fn disabled(enabled: bool) -> &'static str {
    if enabled { "" } else { " disabled" }
}

pub fn render_grid(view: &GridView) -> String {
    let mut body = s!("<header class=\"bar\">\n");
    body.push_str(&search_box(&view.query.text));
    body.push_str(&select("filterType", "All types", &view.index.first, &view.query.first));
    body.push_str(&select("filterVendor", "All vendors", &view.index.second, &view.query.second));
    body.push_str("</header>\n");

    let _ = writeln!(body, "<div id=\"meta\">{}</div>", escape(view.status_text()));

    body.push_str("<main id=\"grid\">\n");
    for c in &view.cards {
        body.push_str(&card(c));
    }
    body.push_str("</main>\n");

    let _ = writeln!(
        body,
        "<nav class=\"pager\"><button id=\"prev\"{}>Prev</button>\
         <span id=\"pageInfo\">{}</span>\
         <button id=\"next\"{}>Next</button></nav>",
        disabled(view.prev_enabled),
        escape(view.page_text()),
        disabled(view.next_enabled)
    );

    document("Catalog", GRID_CSS, &body)
}
