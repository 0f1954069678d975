mod edit;
mod error;
mod only;
mod times;

pub use edit::{EditBatch, LineEdit};
pub use error::RewriteError;
pub use only::{plan_toggle_only, toggle_only_line};
pub use times::{plan_unwrap, plan_wrap, times_state, TimesState};

use crate::parser::classify_declaration;

/// Nearest declaration line at or above `cursor`, scanning toward line 0.
pub fn find_declaration(lines: &[String], cursor: usize) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }
    let mut i = cursor.min(lines.len() - 1);
    loop {
        if classify_declaration(&lines[i]).is_some() {
            return Some(i);
        }
        if i == 0 {
            return None;
        }
        i -= 1;
    }
}
