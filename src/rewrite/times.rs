use super::edit::EditBatch;
use super::error::RewriteError;
use crate::parser::{classify_declaration, classify_wrapper, find_block_end, opens_block, WrapperOpen};

/// Whether the declaration at `decl_line` already sits inside a times
/// wrapper: it does exactly when the line directly above matches the
/// wrapper shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesState {
    Wrapped { wrapper_line: usize },
    Unwrapped,
}

pub fn times_state(lines: &[String], decl_line: usize) -> TimesState {
    if decl_line > 0 && classify_wrapper(&lines[decl_line - 1]).is_some() {
        TimesState::Wrapped {
            wrapper_line: decl_line - 1,
        }
    } else {
        TimesState::Unwrapped
    }
}

/// Plan wrapping the block at `decl_line` in `Cypress._.times(count, ...)`:
/// close the wrapper after the block end, indent the whole block by one
/// unit, open the wrapper before the declaration. All indices are against
/// the pre-edit snapshot.
pub fn plan_wrap(
    lines: &[String],
    decl_line: usize,
    count: u32,
    indent_unit: &str,
) -> Result<EditBatch, RewriteError> {
    let decl =
        classify_declaration(&lines[decl_line]).ok_or(RewriteError::DeclarationNotFound)?;
    // The declaration must open its block on the same line for the range to
    // be meaningful; the scanner itself does not enforce that.
    if !opens_block(&lines[decl_line]) {
        return Err(RewriteError::BlockEndNotFound { start: decl_line });
    }
    let block_end =
        find_block_end(lines, decl_line).ok_or(RewriteError::BlockEndNotFound { start: decl_line })?;

    let mut batch = EditBatch::new();
    batch.insert_before(block_end + 1, WrapperOpen::render_close(&decl.indent));
    for i in decl_line..=block_end {
        batch.replace(i, format!("{indent_unit}{}", lines[i]));
    }
    batch.insert_before(decl_line, WrapperOpen::render(&decl.indent, count));
    Ok(batch)
}

/// Plan removing the wrapper opened at `wrapper_line`: delete its closing
/// line, strip one indent unit from every line strictly inside the wrapper
/// body, delete the wrapper line. Lines without the leading unit are left
/// as they are. Exact inverse of `plan_wrap` on identical input.
pub fn plan_unwrap(
    lines: &[String],
    wrapper_line: usize,
    indent_unit: &str,
) -> Result<EditBatch, RewriteError> {
    let close = find_block_end(lines, wrapper_line).ok_or(RewriteError::BlockEndNotFound {
        start: wrapper_line,
    })?;

    let mut batch = EditBatch::new();
    batch.delete(close);
    for i in wrapper_line + 1..close {
        if let Some(stripped) = lines[i].strip_prefix(indent_unit) {
            batch.replace(i, stripped);
        }
    }
    batch.delete(wrapper_line);
    Ok(batch)
}
