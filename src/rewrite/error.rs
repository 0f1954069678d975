use thiserror::Error;

/// Failures a rewrite plan can report. Every one of these leaves the
/// document untouched; the command layer turns them into user notices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("no it/describe/context block found above cursor")]
    DeclarationNotFound,

    #[error("no closing brace for the block opened at line {start}")]
    BlockEndNotFound { start: usize },

    #[error("conflicting edits for line {line}")]
    EditConflict { line: usize },

    #[error("edit references line {line} but the document has {len} lines")]
    LineOutOfRange { line: usize, len: usize },
}
