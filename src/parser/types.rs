/// Keywords that introduce a test case or grouping block.
pub const DECLARATION_KEYWORDS: [&str; 3] = ["it", "describe", "context"];

/// Modifier restricting a run to this declaration among its siblings.
pub const ONLY_SUFFIX: &str = ".only";

/// Name of the repetition construct the times toggle wraps blocks in.
pub const WRAPPER_NAME: &str = "Cypress._.times";

/// One level of leading whitespace, added/removed atomically on re-indent.
pub const DEFAULT_INDENT_UNIT: &str = "\t";

/// Count pre-filled in the repeat prompt.
pub const DEFAULT_REPEAT_COUNT: u32 = 10;

/// A matched test-declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub indent: String,
    pub keyword: &'static str,
    pub only: bool,
}

impl Declaration {
    /// Byte length of the line prefix up to (not including) the call paren.
    pub fn prefix_len(&self) -> usize {
        let only_len = if self.only { ONLY_SUFFIX.len() } else { 0 };
        self.indent.len() + self.keyword.len() + only_len
    }
}

/// A matched `Cypress._.times(N, () => {` opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperOpen {
    pub indent: String,
    pub count: u32,
}

impl WrapperOpen {
    /// Canonical wrapper opening line as the wrap rewrite emits it.
    pub fn render(indent: &str, count: u32) -> String {
        format!("{indent}{WRAPPER_NAME}({count}, () => {{")
    }

    /// Closing line matching a wrapper opened at `indent`.
    pub fn render_close(indent: &str) -> String {
        format!("{indent}}});")
    }
}
