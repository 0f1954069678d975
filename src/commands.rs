//! The two user-facing commands, driven over a [`Host`]. Each invocation
//! reads the document once, computes one edit batch, and either applies it
//! atomically or reports a notice; a failing run issues zero edits.

use crate::host::Host;
use crate::parser::DEFAULT_REPEAT_COUNT;
use crate::rewrite::{
    find_declaration, plan_toggle_only, plan_unwrap, plan_wrap, times_state, TimesState,
};
use std::io;

pub const NOT_FOUND_NOTICE: &str = "No it/describe/context block found above cursor.";
pub const BLOCK_END_NOTICE: &str = "Could not find end of test block.";
pub const WRAPPER_END_NOTICE: &str = "Could not find end of Cypress._.times block.";
pub const COUNT_PROMPT: &str = "Number of times to repeat";

/// How a command invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Edits were applied.
    Applied,
    /// Nothing to do; a notice was shown.
    Rejected,
    /// The user cancelled the repeat prompt. Silent no-op.
    Cancelled,
}

/// Flip `.only` on the nearest declaration at or above the cursor.
pub fn toggle_only<H: Host>(host: &mut H) -> io::Result<Outcome> {
    let lines = host.lines();
    match plan_toggle_only(&lines, host.cursor_line()) {
        Ok(batch) => {
            host.apply(&batch)?;
            Ok(Outcome::Applied)
        }
        Err(_) => {
            host.notify(NOT_FOUND_NOTICE);
            Ok(Outcome::Rejected)
        }
    }
}

/// Wrap the nearest declaration block in `Cypress._.times`, or unwrap it
/// when the line above the declaration is already a wrapper.
pub fn toggle_times<H: Host>(host: &mut H) -> io::Result<Outcome> {
    let lines = host.lines();
    let Some(decl_line) = find_declaration(&lines, host.cursor_line()) else {
        host.notify(NOT_FOUND_NOTICE);
        return Ok(Outcome::Rejected);
    };

    match times_state(&lines, decl_line) {
        TimesState::Wrapped { wrapper_line } => {
            match plan_unwrap(&lines, wrapper_line, &host.indent_unit()) {
                Ok(batch) => {
                    host.apply(&batch)?;
                    Ok(Outcome::Applied)
                }
                Err(_) => {
                    host.notify(WRAPPER_END_NOTICE);
                    Ok(Outcome::Rejected)
                }
            }
        }
        TimesState::Unwrapped => {
            let Some(count) = host.prompt_count(COUNT_PROMPT, DEFAULT_REPEAT_COUNT)? else {
                return Ok(Outcome::Cancelled);
            };
            match plan_wrap(&lines, decl_line, count, &host.indent_unit()) {
                Ok(batch) => {
                    host.apply(&batch)?;
                    Ok(Outcome::Applied)
                }
                Err(_) => {
                    host.notify(BLOCK_END_NOTICE);
                    Ok(Outcome::Rejected)
                }
            }
        }
    }
}
