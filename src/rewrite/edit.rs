use super::error::RewriteError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A single line-level operation, keyed by pre-edit line index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineEdit {
    /// Insert a new line so it ends up directly before pre-edit `line`.
    /// `line == len` appends after the last line.
    InsertBefore { line: usize, text: String },
    /// Replace the text of pre-edit `line`.
    Replace { line: usize, text: String },
    /// Remove pre-edit `line` entirely, terminator included.
    Delete { line: usize },
}

/// An ordered set of edits computed against one document snapshot and meant
/// to be applied as a single transaction. All indices refer to pre-edit
/// numbering; earlier edits never shift the indices of later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBatch {
    edits: Vec<LineEdit>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edits(edits: Vec<LineEdit>) -> Self {
        Self { edits }
    }

    pub fn insert_before(&mut self, line: usize, text: impl Into<String>) {
        self.edits.push(LineEdit::InsertBefore {
            line,
            text: text.into(),
        });
    }

    pub fn replace(&mut self, line: usize, text: impl Into<String>) {
        self.edits.push(LineEdit::Replace {
            line,
            text: text.into(),
        });
    }

    pub fn delete(&mut self, line: usize) {
        self.edits.push(LineEdit::Delete { line });
    }

    pub fn edits(&self) -> &[LineEdit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Produce the post-edit document from a snapshot in one pass.
    ///
    /// Out-of-range indices and conflicting edits (two replaces of one line,
    /// replace of a deleted line, double delete) are rejected before any
    /// line is produced, so a failing batch changes nothing.
    pub fn apply(&self, lines: &[String]) -> Result<Vec<String>, RewriteError> {
        let len = lines.len();
        let mut inserts: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        let mut replaced: HashMap<usize, &str> = HashMap::new();
        let mut deleted: HashSet<usize> = HashSet::new();

        for edit in &self.edits {
            match edit {
                LineEdit::InsertBefore { line, text } => {
                    if *line > len {
                        return Err(RewriteError::LineOutOfRange { line: *line, len });
                    }
                    inserts.entry(*line).or_default().push(text);
                }
                LineEdit::Replace { line, text } => {
                    if *line >= len {
                        return Err(RewriteError::LineOutOfRange { line: *line, len });
                    }
                    if deleted.contains(line) || replaced.insert(*line, text).is_some() {
                        return Err(RewriteError::EditConflict { line: *line });
                    }
                }
                LineEdit::Delete { line } => {
                    if *line >= len {
                        return Err(RewriteError::LineOutOfRange { line: *line, len });
                    }
                    if replaced.contains_key(line) || !deleted.insert(*line) {
                        return Err(RewriteError::EditConflict { line: *line });
                    }
                }
            }
        }

        let mut out = Vec::with_capacity(len + self.edits.len());
        for i in 0..=len {
            if let Some(texts) = inserts.get(&i) {
                for text in texts {
                    out.push((*text).to_string());
                }
            }
            if i == len {
                break;
            }
            if deleted.contains(&i) {
                continue;
            }
            match replaced.get(&i) {
                Some(text) => out.push((*text).to_string()),
                None => out.push(lines[i].clone()),
            }
        }
        Ok(out)
    }
}
