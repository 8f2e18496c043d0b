// src/runner.rs
//
// Headless pipeline used by the CLI (and the GUI loader thread):
//   source text → rows → records → session → view → HTML file

use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, PageKind, SourceOptions},
    core::net,
    csv,
    data::Query,
    error::{CatalogError, Result},
    file,
    progress::Progress,
    render,
    session::{BrochureSession, GridSession},
    specs::{self, CatalogLine, Normalize, Product},
};

/// Raw export text for `kind`: the local input file if one is set, else
/// that page's URL.
pub fn load_text(
    source: &SourceOptions,
    kind: PageKind,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<String> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Loading {}…", source.describe(kind)));
    }
    let text = match &source.input {
        Some(path) => file::read_input(path)?,
        None => match source.url_for(kind) {
            "" => return Err(CatalogError::MissingUrl(kind.name())),
            url => net::http_get(url)?,
        },
    };
    if let Some(p) = progress.as_deref_mut() {
        p.fetched(text.len());
    }
    Ok(text)
}

/// Parse and normalize already-loaded text.
pub fn records_from_text<T: Normalize>(
    text: &str,
    delim: char,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<T> {
    let missing = T::missing_columns(&csv::headers(text, delim));
    if !missing.is_empty() {
        logf!("Runner: export lacks columns: {}", missing.join(", "));
    }
    let rows = csv::parse_records(text, delim);
    let records = specs::normalize_all::<T>(&rows);
    logf!("Runner: {} rows parsed, {} records kept", rows.len(), records.len());
    if let Some(p) = progress {
        p.normalized(records.len(), rows.len());
    }
    records
}

pub fn load_records<T: Normalize>(
    source: &SourceOptions,
    kind: PageKind,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<T>> {
    let text = load_text(source, kind, progress.as_deref_mut())?;
    Ok(records_from_text(&text, source.delim, progress))
}

/// Everything a headless render needs besides the options.
#[derive(Clone, Debug, Default)]
pub struct RenderRequest {
    pub query: Query,
    /// 1-based; clamped to the available pages. Grid only.
    pub page_no: usize,
}

pub fn render_grid_text(opts: &AppOptions, text: &str, req: &RenderRequest) -> String {
    let mut session = GridSession::new(&opts.render);
    session.load(records_from_text::<Product>(text, opts.source.delim, None));
    session.set_query(req.query.clone());
    session.go_to(req.page_no.max(1));
    render::render_grid(&session.view())
}

pub fn render_brochure_text(opts: &AppOptions, text: &str, req: &RenderRequest) -> String {
    let mut session = BrochureSession::new(&opts.render);
    session.load(records_from_text::<CatalogLine>(text, opts.source.delim, None));
    session.set_query(req.query.clone());
    render::render_brochure(&session.view())
}

/// Load, render and write the page chosen in `opts.render.page`.
///
/// On a failed load the output file still gets written, holding only the
/// `Error: …` status line, and the error is returned.
pub fn run(
    opts: &AppOptions,
    req: &RenderRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PathBuf> {
    let kind = opts.render.page;
    let out = opts.render.out_path();
    logf!("Runner: page={:?} source={} out={}", kind, opts.source.describe(kind), out.display());

    let text = match load_text(&opts.source, kind, progress.as_deref_mut()) {
        Ok(t) => t,
        Err(e) => {
            loge!("Runner: load failed: {}", e);
            file::write_output(&out, &render::render_error(kind, &e.status_text()))?;
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    let html = match kind {
        PageKind::Grid => render_grid_text(opts, &text, req),
        PageKind::Brochure => render_brochure_text(opts, &text, req),
    };
    let written = file::write_output(&out, &html)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(written)
}

/// Filter values for the chosen page, for `--list-filters`.
pub fn list_filters(opts: &AppOptions, text: &str) -> (Vec<String>, Vec<String>) {
    let index = match opts.render.page {
        PageKind::Grid => crate::data::FilterIndex::build(&records_from_text::<Product>(
            text,
            opts.source.delim,
            None,
        )),
        PageKind::Brochure => crate::data::FilterIndex::build(&records_from_text::<CatalogLine>(
            text,
            opts.source.delim,
            None,
        )),
    };
    (index.first, index.second)
}
