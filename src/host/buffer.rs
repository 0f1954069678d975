use super::Host;
use crate::parser::DEFAULT_INDENT_UNIT;
use crate::rewrite::EditBatch;
use std::io::{self, BufRead, Write};

enum CountSource {
    /// Prompt on stdin, re-asking until the input is a positive integer.
    Stdin,
    /// Scripted answer; `None` plays a cancelled prompt.
    Fixed(Option<u32>),
}

/// In-memory host over a plain `Vec` of lines. Used by the interactive CLI
/// mode and by tests; notices go to stderr and are also retained for
/// inspection.
pub struct BufferHost {
    lines: Vec<String>,
    cursor: usize,
    indent_unit: String,
    count_source: CountSource,
    notices: Vec<String>,
}

impl BufferHost {
    pub fn new(lines: Vec<String>, cursor: usize) -> Self {
        Self {
            lines,
            cursor,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            count_source: CountSource::Stdin,
            notices: Vec::new(),
        }
    }

    /// Answer the repeat prompt without touching stdin.
    pub fn with_count(mut self, count: Option<u32>) -> Self {
        self.count_source = CountSource::Fixed(count);
        self
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn prompt_stdin(prompt: &str, default: u32) -> io::Result<Option<u32>> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        loop {
            eprint!("{prompt} [{default}]: ");
            io::stderr().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF cancels the prompt.
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Some(default));
            }
            match trimmed.parse::<u32>() {
                Ok(count) if count > 0 => return Ok(Some(count)),
                _ => eprintln!("Enter a positive number"),
            }
        }
    }
}

impl Host for BufferHost {
    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn cursor_line(&self) -> usize {
        self.cursor
    }

    fn indent_unit(&self) -> String {
        self.indent_unit.clone()
    }

    fn prompt_count(&mut self, prompt: &str, default: u32) -> io::Result<Option<u32>> {
        match &self.count_source {
            CountSource::Fixed(count) => Ok(*count),
            CountSource::Stdin => Self::prompt_stdin(prompt, default),
        }
    }

    fn apply(&mut self, batch: &EditBatch) -> io::Result<()> {
        let next = batch
            .apply(&self.lines)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        self.lines = next;
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
        self.notices.push(message.to_string());
    }
}
