// src/progress.rs
/// Lightweight progress reporting used by the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called after login with the number of ledger pages to sweep.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one ledger month has been scraped.
    fn page_done(&mut self, _month: &str, _transactions: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
