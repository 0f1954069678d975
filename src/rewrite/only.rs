use super::edit::EditBatch;
use super::error::RewriteError;
use super::find_declaration;
use crate::parser::{classify_declaration, ONLY_SUFFIX};

/// Flip the `.only` modifier on a declaration line. Returns the rewritten
/// line, or `None` when the line is not a declaration. The call suffix from
/// the paren onward is kept verbatim.
pub fn toggle_only_line(line: &str) -> Option<String> {
    let decl = classify_declaration(line)?;
    let call = &line[decl.prefix_len()..];
    let toggled = if decl.only {
        format!("{}{}{}", decl.indent, decl.keyword, call)
    } else {
        format!("{}{}{}{}", decl.indent, decl.keyword, ONLY_SUFFIX, call)
    };
    Some(toggled)
}

/// Plan the `.only` toggle for the nearest declaration at or above `cursor`.
/// Single-line replace; no other line is touched.
pub fn plan_toggle_only(lines: &[String], cursor: usize) -> Result<EditBatch, RewriteError> {
    let decl_line = find_declaration(lines, cursor).ok_or(RewriteError::DeclarationNotFound)?;
    let toggled =
        toggle_only_line(&lines[decl_line]).ok_or(RewriteError::DeclarationNotFound)?;
    let mut batch = EditBatch::new();
    batch.replace(decl_line, toggled);
    Ok(batch)
}
