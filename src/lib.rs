//! Structural rewrites for Cypress test files.
//!
//! Two commands, both anchored to the nearest `it`/`describe`/`context`
//! declaration above a cursor line: toggling the `.only` modifier on the
//! declaration, and wrapping/unwrapping its whole block in a
//! `Cypress._.times(N, () => { ... })` repetition construct with consistent
//! re-indentation. Edits are computed against a document snapshot and applied
//! as one atomic batch by the hosting editor.

pub mod adapter;
pub mod commands;
pub mod host;
pub mod logging;
pub mod parser;
pub mod rewrite;
