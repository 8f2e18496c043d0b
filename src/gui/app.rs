// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
    thread,
};

use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    data::Query,
    runner,
};

use super::{pages::Page, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sheet Catalog",
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, cc.egui_ctx.clone())))),
    )?;
    Ok(())
}

/// Per-page load lifecycle. Filtering only happens once `Loaded`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
    /// Status text to show instead of the page, e.g. `Error: Failed to load CSV`.
    Failed(String),
}

/// Worker → UI message: export text, or the status text of the failure.
type LoadMsg = (PageKind, Result<String, String>);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub grid: crate::session::GridSession,
    pub brochure: crate::session::BrochureSession,

    pub load: HashMap<PageKind, LoadState>,

    /// Edit buffers for the filter bar, per page.
    pub inputs: HashMap<PageKind, Query>,

    /// Edit buffers for the source bar, per page.
    pub url_inputs: HashMap<PageKind, String>,

    // loader thread plumbing
    pub progress_text: Arc<Mutex<String>>,
    tx: Sender<LoadMsg>,
    rx: Receiver<LoadMsg>,
    egui_ctx: egui::Context,
}

impl App {
    pub fn new(mut state: AppState, egui_ctx: egui::Context) -> Self {
        let (tx, rx) = mpsc::channel();
        state.gui.current_page_index = router::index_of(state.options.render.page);
        let grid = crate::session::GridSession::new(&state.options.render);
        let brochure = crate::session::BrochureSession::new(&state.options.render);
        let url_inputs = router::all_pages()
            .iter()
            .map(|p| (p.kind(), s!(state.options.source.url_for(p.kind()))))
            .collect();

        let mut app = Self {
            state,
            grid,
            brochure,
            load: HashMap::new(),
            inputs: HashMap::new(),
            url_inputs,
            progress_text: Arc::new(Mutex::new(s!("Idle"))),
            tx,
            rx,
            egui_ctx,
        };

        logf!("Init: pages={}, default page={:?}", router::all_pages().len(), app.current_page_kind());
        app.ensure_loaded(app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { router::all_pages()[self.current_index()].kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    pub fn load_state(&self, kind: PageKind) -> LoadState {
        self.load.get(&kind).cloned().unwrap_or(LoadState::Unloaded)
    }

    fn progress_message(&self) -> String {
        self.progress_text.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Status line for the current page.
    pub fn status_line(&self) -> String {
        let page = self.current_page();
        match self.load_state(page.kind()) {
            LoadState::Unloaded => s!("Idle"),
            LoadState::Loading => self.progress_message(),
            LoadState::Loaded => page.status_text(self),
            LoadState::Failed(msg) => msg,
        }
    }

    /// Start the one fetch for `kind` unless it already ran.
    pub fn ensure_loaded(&mut self, kind: PageKind) {
        if self.load_state(kind) != LoadState::Unloaded {
            return;
        }
        self.load.insert(kind, LoadState::Loading);

        let source = self.state.options.source.clone();
        let tx = self.tx.clone();
        let ctx = self.egui_ctx.clone();
        let mut prog = GuiProgress::new(self.progress_text.clone());

        logf!("Load: Begin page={:?} source={}", kind, source.describe(kind));
        thread::spawn(move || {
            let res = runner::load_text(&source, kind, Some(&mut prog)).map_err(|e| {
                loge!("Load: Error page={:?}: {}", kind, e);
                e.status_text()
            });
            let _ = tx.send((kind, res));
            ctx.request_repaint();
        });
    }

    /// Point `kind` at `url` and fetch it again. Ignored while a fetch for
    /// that page is in flight.
    pub fn reload(&mut self, kind: PageKind, url: &str) {
        if self.load_state(kind) == LoadState::Loading {
            return;
        }
        logf!("UI: Reload page={:?} url={}", kind, url);
        self.state.options.source.set_url(kind, url);
        self.load.remove(&kind);
        self.ensure_loaded(kind);
    }

    /// Drain finished loads into their sessions.
    fn poll_loads(&mut self) {
        while let Ok((kind, res)) = self.rx.try_recv() {
            match res {
                Ok(text) => {
                    router::page_for(kind).load(self, &text);
                    self.inputs.insert(kind, Query::default());
                    self.load.insert(kind, LoadState::Loaded);
                    logf!("Load: OK page={:?} ({} bytes)", kind, text.len());
                }
                Err(status) => {
                    self.load.insert(kind, LoadState::Failed(status));
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);
            crate::gui::components::source_bar::draw(ui, self);
            ui.separator();
            crate::gui::components::filter_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            match self.load_state(page.kind()) {
                LoadState::Loaded => page.draw(ui, self),
                LoadState::Loading => {
                    ui.centered_and_justified(|ui| ui.spinner());
                }
                LoadState::Unloaded | LoadState::Failed(_) => {}
            }
        });
    }
}
