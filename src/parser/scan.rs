/// String context tracked while counting braces. Plain quotes cannot span
/// lines in JS; template literals can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    None,
    Single,
    Double,
    Template,
}

/// Character-level tracker that filters out braces inside string literals.
/// Braces in comments are still counted; that limitation is accepted.
struct QuoteTracker {
    string: StringState,
    escaped: bool,
}

impl QuoteTracker {
    fn new() -> Self {
        Self {
            string: StringState::None,
            escaped: false,
        }
    }

    /// Feed one character; returns the character when it is a structural
    /// brace, `None` when it is quoted or not a brace.
    fn structural(&mut self, ch: char) -> Option<char> {
        if self.escaped {
            self.escaped = false;
            return None;
        }
        match self.string {
            StringState::None => match ch {
                '\'' => self.string = StringState::Single,
                '"' => self.string = StringState::Double,
                '`' => self.string = StringState::Template,
                '{' | '}' => return Some(ch),
                _ => {}
            },
            StringState::Single => match ch {
                '\\' => self.escaped = true,
                '\'' => self.string = StringState::None,
                _ => {}
            },
            StringState::Double => match ch {
                '\\' => self.escaped = true,
                '"' => self.string = StringState::None,
                _ => {}
            },
            StringState::Template => match ch {
                '\\' => self.escaped = true,
                '`' => self.string = StringState::None,
                _ => {}
            },
        }
        None
    }

    /// An unterminated plain string is cut off at the end of its line; a
    /// template literal carries across lines (every brace inside it is
    /// skipped, interpolation included).
    fn end_line(&mut self) {
        if self.string == StringState::Single || self.string == StringState::Double {
            self.string = StringState::None;
        }
        self.escaped = false;
    }
}

/// Find the line on which the brace-delimited block starting at `start`
/// closes: the first character where the running depth returns to 0 after
/// having been incremented at least once. Returns `None` if the document
/// ends first. Depth never goes negative; stray closers before the first
/// opener are ignored.
pub fn find_block_end(lines: &[String], start: usize) -> Option<usize> {
    let mut depth: u32 = 0;
    let mut opened = false;
    let mut tracker = QuoteTracker::new();

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match tracker.structural(ch) {
                Some('{') => {
                    depth += 1;
                    opened = true;
                }
                Some('}') => {
                    if depth > 0 {
                        depth -= 1;
                        if depth == 0 && opened {
                            return Some(i);
                        }
                    }
                }
                _ => {}
            }
        }
        tracker.end_line();
    }

    None
}

/// Whether a line opens a block itself, i.e. contains a structural `{`.
/// A block range is only usable when its starting line opens the block;
/// `find_block_end` does not enforce that, callers check it with this.
pub fn opens_block(line: &str) -> bool {
    let mut tracker = QuoteTracker::new();
    line.chars()
        .any(|ch| tracker.structural(ch) == Some('{'))
}
