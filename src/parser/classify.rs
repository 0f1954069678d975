use super::types::{Declaration, WrapperOpen, DECLARATION_KEYWORDS, ONLY_SUFFIX, WRAPPER_NAME};

/// Split a line into its leading whitespace and the rest.
pub fn split_indent(line: &str) -> (&str, &str) {
    let body = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    line.split_at(body)
}

/// Match a test-declaration line: indent, keyword, optional `.only`, then the
/// call paren immediately after. Anything else, including whitespace between
/// the keyword and `(`, is not a declaration.
pub fn classify_declaration(line: &str) -> Option<Declaration> {
    let (indent, rest) = split_indent(line);
    for keyword in DECLARATION_KEYWORDS {
        let Some(after) = rest.strip_prefix(keyword) else {
            continue;
        };
        if after.starts_with('(') {
            return Some(Declaration {
                indent: indent.to_string(),
                keyword,
                only: false,
            });
        }
        if let Some(after_only) = after.strip_prefix(ONLY_SUFFIX) {
            if after_only.starts_with('(') {
                return Some(Declaration {
                    indent: indent.to_string(),
                    keyword,
                    only: true,
                });
            }
        }
    }
    None
}

/// Match a wrapper opening line: indent, `Cypress._.times(`, an integer
/// count, `, () => {`, end of line. Inner whitespace is flexible; trailing
/// non-whitespace after `{` invalidates the match.
pub fn classify_wrapper(line: &str) -> Option<WrapperOpen> {
    let (indent, rest) = split_indent(line);
    let rest = rest.strip_prefix(WRAPPER_NAME)?;
    let rest = rest.strip_prefix('(')?.trim_start();

    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }
    let count: u32 = rest[..digits].parse().ok()?;

    let rest = rest[digits..].trim_start();
    let rest = rest.strip_prefix(',')?.trim_start();
    let rest = rest.strip_prefix("()")?.trim_start();
    let rest = rest.strip_prefix("=>")?.trim_start();
    let rest = rest.strip_prefix('{')?;
    if !rest.trim().is_empty() {
        return None;
    }

    Some(WrapperOpen {
        indent: indent.to_string(),
        count,
    })
}
