mod classify;
mod scan;
mod types;

pub use classify::{classify_declaration, classify_wrapper, split_indent};
pub use scan::{find_block_end, opens_block};
pub use types::{
    Declaration, WrapperOpen, DECLARATION_KEYWORDS, DEFAULT_INDENT_UNIT, DEFAULT_REPEAT_COUNT,
    ONLY_SUFFIX, WRAPPER_NAME,
};
