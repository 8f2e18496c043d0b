// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, PageKind};
use crate::error::{CatalogError, Result};
use crate::progress::Progress;
use crate::runner::{self, RenderRequest};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug)]
pub enum Command {
    Render(AppOptions, RenderRequest),
    ListFilters(AppOptions),
    Help,
}

/// Prints load progress to stderr.
pub struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn fetched(&mut self, bytes: usize) {
        eprintln!("Received {bytes} bytes");
    }
    fn normalized(&mut self, kept: usize, rows: usize) {
        eprintln!("{kept} of {rows} rows usable");
    }
}

pub fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::ListFilters(opts) => {
            let text = runner::load_text(&opts.source, opts.render.page, Some(&mut CliProgress))?;
            let (first, second) = runner::list_filters(&opts, &text);
            let labels = match opts.render.page {
                PageKind::Grid => ["type", "vendor"],
                PageKind::Brochure => ["collection", "product-type"],
            };
            for v in first { println!("{},{}", labels[0], v); }
            for v in second { println!("{},{}", labels[1], v); }
            Ok(())
        }
        Command::Render(opts, req) => {
            let path = runner::run(&opts, &req, Some(&mut CliProgress))?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

pub(crate) fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| CatalogError::usage(format!("Missing value for {flag}")))
}

fn number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<usize> {
    let v = value(args, flag)?;
    match v.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CatalogError::usage(format!("{flag} needs a positive number, got {v}"))),
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut opts = AppOptions::default();
    let mut req = RenderRequest { page_no: 1, ..RenderRequest::default() };
    let mut page_no: Option<usize> = None;
    let mut url: Option<String> = None;
    let mut list_filters = false;
    let mut out: Option<String> = None;

    // Facet flags resolve against the page once all args are read.
    let mut product_type: Option<String> = None;
    let mut vendor: Option<String> = None;
    let mut collection: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => {
                let v = value(&mut args, "--page")?;
                opts.render.page = PageKind::parse(&v)
                    .ok_or_else(|| CatalogError::usage(format!("Unknown page: {v}")))?;
            }
            "--url" => url = Some(value(&mut args, "--url")?),
            "--grid-url" => opts.source.set_url(PageKind::Grid, value(&mut args, "--grid-url")?),
            "--brochure-url" => {
                opts.source.set_url(PageKind::Brochure, value(&mut args, "--brochure-url")?)
            }
            "--input" => opts.source.input = Some(PathBuf::from(value(&mut args, "--input")?)),
            "--tsv" => opts.source.delim = '\t',
            "-q" | "--query" => req.query.text = value(&mut args, "--query")?,
            "--type" | "--product-type" => product_type = Some(value(&mut args, &a)?),
            "--vendor" => vendor = Some(value(&mut args, "--vendor")?),
            "--collection" => collection = Some(value(&mut args, "--collection")?),
            "--page-no" => page_no = Some(number(&mut args, "--page-no")?),
            "--page-size" => opts.render.page_size = number(&mut args, "--page-size")?,
            "--currency" => opts.render.currency = value(&mut args, "--currency")?,
            "--list-filters" => list_filters = true,
            "-o" | "--out" => out = Some(value(&mut args, "--out")?),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(CatalogError::usage(format!("Unknown arg: {a}"))),
        }
    }

    match opts.render.page {
        PageKind::Grid => {
            if collection.is_some() {
                return Err(CatalogError::usage("--collection only applies to --page brochure"));
            }
            req.query.first = product_type.unwrap_or_default();
            req.query.second = vendor.unwrap_or_default();
            req.page_no = page_no.unwrap_or(1);
        }
        PageKind::Brochure => {
            if vendor.is_some() {
                return Err(CatalogError::usage("--vendor only applies to --page grid"));
            }
            if page_no.is_some() {
                return Err(CatalogError::usage("--page-no only applies to --page grid"));
            }
            req.query.first = collection.unwrap_or_default();
            req.query.second = product_type.unwrap_or_default();
        }
    }

    // `--url` means the chosen page's URL, wherever --page appears.
    if let Some(u) = url {
        opts.source.set_url(opts.render.page, u);
    }

    // After --page, so the default file name follows the page.
    if let Some(o) = out {
        opts.render.set_out(&o);
    }

    if list_filters {
        return Ok(Command::ListFilters(opts));
    }
    Ok(Command::Render(opts, req))
}
