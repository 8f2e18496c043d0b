// src/render/brochure.rs
use std::fmt::Write as _;

use crate::core::html::escape;
use crate::view::{BrochureView, Sheet, TypeBlock};

use super::{document, lazy_img, search_box, select};

const BROCHURE_CSS: &str = "\
.sheet{background:#fff;margin:16px auto;max-width:1000px;border:1px solid #ddd}\
.band{background:#111;color:#fff;padding:10px 16px;letter-spacing:.08em;text-transform:uppercase}\
.body{display:grid;grid-template-columns:2fr 3fr;gap:16px;padding:16px}\
.swatches{display:flex;gap:6px;margin:8px 0}.swatches img{width:40px;height:40px;object-fit:cover}\
.colours{color:#555;margin-bottom:10px}\
.type-band{background:#eee;padding:4px 8px;font-weight:650;margin-top:10px}\
table{border-collapse:collapse;width:100%}td,th{border:1px solid #ccc;padding:4px 8px;text-align:left}\
.thumbs{display:flex;gap:8px;margin-top:10px}.thumbs img{width:120px}";

fn type_block(b: &TypeBlock) -> String {
    let mut out = s!("<div class=\"type-block\">\n");
    let _ = writeln!(out, "<div class=\"type-band\">{}</div>", escape(&b.product_type));
    out.push_str("<table>\n<tr><th>Size</th><th>Carton qty</th><th>Unit price</th></tr>\n");
    for r in &b.rows {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&r.size),
            escape(&r.carton_qty),
            escape(&r.price)
        );
    }
    out.push_str("</table>\n</div>\n");
    out
}

fn sheet(s: &Sheet) -> String {
    let mut out = s!("<section class=\"sheet\">\n");
    let _ = writeln!(out, "<div class=\"band\">{}</div>", escape(&s.collection_name));
    out.push_str("<div class=\"body\">\n<div class=\"left\">\n");

    if !s.hero_image_url.is_empty() {
        let _ = writeln!(out, "{}", lazy_img("hero", &s.hero_image_url, &s.range_name));
    }
    if !s.swatches.is_empty() {
        out.push_str("<div class=\"swatches\">");
        for sw in &s.swatches {
            out.push_str(&lazy_img("swatch", sw, "Swatch"));
        }
        out.push_str("</div>\n");
    }
    if !s.texture_image_url.is_empty() {
        let _ = writeln!(out, "{}", lazy_img("texture", &s.texture_image_url, "Texture"));
    }

    out.push_str("</div>\n<div class=\"right\">\n");
    let _ = writeln!(out, "<h2 class=\"range\">{}</h2>", escape(&s.range_name));
    if !s.colours.is_empty() {
        let _ = writeln!(out, "<div class=\"colours\">{}</div>", escape(&s.colours));
    }
    for b in &s.blocks {
        out.push_str(&type_block(b));
    }
    if !s.thumbs.is_empty() {
        out.push_str("<div class=\"thumbs\">");
        for t in &s.thumbs {
            out.push_str(&lazy_img("thumb", t, &s.range_name));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n</section>\n");
    out
}

pub fn render_brochure(view: &BrochureView) -> String {
    let mut body = s!("<header class=\"bar\">\n");
    body.push_str(&search_box(&view.query.text));
    body.push_str(&select("filterCollection", "All collections", &view.index.first, &view.query.first));
    body.push_str(&select("filterType", "All types", &view.index.second, &view.query.second));
    body.push_str("</header>\n");

    let _ = writeln!(body, "<div id=\"meta\">{}</div>", escape(view.status_text()));

    body.push_str("<main id=\"sheets\">\n");
    for s in &view.sheets {
        body.push_str(&sheet(s));
    }
    body.push_str("</main>\n");

    document("Brochure", BROCHURE_CSS, &body)
}
