// src/progress.rs
/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the number of matched blocks is known.
    fn begin(&mut self, _total: usize) {}

    /// Called when one dated table has been normalized.
    fn item_done(&mut self, _label: &str, _rows: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
