// src/gui/args.rs
//
// Startup arguments for the desktop app:
//   sheet_catalog [grid|brochure] [--grid-url URL] [--brochure-url URL] [--input FILE] [--tsv]

use std::path::PathBuf;

use crate::{
    cli::value,
    config::{options::PageKind, state::AppState},
    error::{CatalogError, Result},
};

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<AppState> {
    let mut state = AppState::default();
    let source = &mut state.options.source;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--grid-url" => source.set_url(PageKind::Grid, value(&mut args, "--grid-url")?),
            "--brochure-url" => source.set_url(PageKind::Brochure, value(&mut args, "--brochure-url")?),
            "--input" => source.input = Some(PathBuf::from(value(&mut args, "--input")?)),
            "--tsv" => source.delim = '\t',
            other => {
                state.options.render.page = PageKind::parse(other)
                    .ok_or_else(|| CatalogError::usage(format!("Unknown arg: {other}")))?;
            }
        }
    }
    Ok(state)
}
