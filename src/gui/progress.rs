// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Worker-side progress: writes into the status text the UI thread reads.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn fetched(&mut self, bytes: usize) {
        self.set_status(format!("Received {} KB, parsing…", bytes.div_ceil(1024)));
    }
    fn normalized(&mut self, kept: usize, rows: usize) {
        self.set_status(format!("{} of {} rows usable", kept, rows));
    }
}
