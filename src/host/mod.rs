mod buffer;

pub use buffer::BufferHost;

use crate::rewrite::EditBatch;
use std::io;

/// Surface the rewrite commands need from the hosting editor. The engine
/// never holds onto a document between invocations; it re-reads through
/// this trait every time, so any buffer implementation can sit behind it.
pub trait Host {
    /// Snapshot of the current document, one entry per line.
    fn lines(&self) -> Vec<String>;

    /// Line the cursor is on, 0-indexed.
    fn cursor_line(&self) -> usize;

    /// One level of leading whitespace for re-indent operations.
    fn indent_unit(&self) -> String;

    /// Ask the user for a repeat count. `Ok(None)` means the prompt was
    /// cancelled; invalid input never reaches the caller.
    fn prompt_count(&mut self, prompt: &str, default: u32) -> io::Result<Option<u32>>;

    /// Apply one batch of edits against the snapshot it was computed from,
    /// transactionally.
    fn apply(&mut self, batch: &EditBatch) -> io::Result<()>;

    /// Show a user-visible notice.
    fn notify(&mut self, message: &str);
}
