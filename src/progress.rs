// src/progress.rs
/// Lightweight progress reporting for the one long-running step (the load).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Raw export received.
    fn fetched(&mut self, _bytes: usize) {}

    /// Rows normalized: `kept` records survived out of `rows` parsed.
    fn normalized(&mut self, _kept: usize, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
