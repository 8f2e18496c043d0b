// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub render: RenderOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PageKind {
    #[default]
    Grid,
    Brochure,
}

impl PageKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "grid" | "products" => Some(PageKind::Grid),
            "brochure" | "catalog" => Some(PageKind::Brochure),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageKind::Grid => "grid",
            PageKind::Brochure => "brochure",
        }
    }

    pub fn default_stem(&self) -> &'static str {
        match self {
            PageKind::Grid => DEFAULT_GRID_FILE,
            PageKind::Brochure => DEFAULT_BROCHURE_FILE,
        }
    }
}

/// Where each page's sheet comes from. The two pages read different
/// exports with different columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub grid_url: String,
    pub brochure_url: String,
    /// Read a local export instead of fetching the page's URL.
    pub input: Option<PathBuf>,
    pub delim: char,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            grid_url: s!(GRID_SHEET_CSV_URL),
            brochure_url: s!(BROCHURE_SHEET_CSV_URL),
            input: None,
            delim: DEFAULT_DELIM,
        }
    }
}

impl SourceOptions {
    pub fn url_for(&self, kind: PageKind) -> &str {
        match kind {
            PageKind::Grid => &self.grid_url,
            PageKind::Brochure => &self.brochure_url,
        }
    }

    pub fn set_url(&mut self, kind: PageKind, url: impl Into<String>) {
        let url = url.into().trim().to_string();
        match kind {
            PageKind::Grid => self.grid_url = url,
            PageKind::Brochure => self.brochure_url = url,
        }
    }

    /// Human-readable origin for logs and status text.
    pub fn describe(&self, kind: PageKind) -> String {
        match &self.input {
            Some(p) => p.display().to_string(),
            None => s!(self.url_for(kind)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub page: PageKind,
    pub page_size: usize,
    pub currency: String,
    out: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page: PageKind::Grid,
            page_size: PAGE_SIZE,
            currency: s!(CURRENCY),
            out: None,
        }
    }
}

impl RenderOptions {
    /// Explicit output path if one was set, else `out/<stem>.html` for the page.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR).join(join!(self.page.default_stem(), ".html")),
        }
    }

    /// A trailing separator or an existing directory means "write the default
    /// file name in there".
    pub fn set_out(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out = None;
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out = if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            Some(p.join(join!(self.page.default_stem(), ".html")))
        } else {
            Some(p)
        };
    }
}
