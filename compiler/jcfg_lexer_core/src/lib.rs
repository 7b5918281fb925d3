//! Low-level scanning primitives for Junos-style configuration text.
//!
//! This crate knows nothing about tokens or statements. It provides:
//! - [`Cursor`]: a rune cursor with one-rune backup and a pending-token start
//! - [`Span`]: a compact byte range into the source
//! - [`line_col`]: 1-based line/column mapping for diagnostics
//!
//! The token-producing state machine lives in `jcfg_lexer`.

mod cursor;
mod position;
mod span;

pub use cursor::Cursor;
pub use position::{column_number, line_col, line_number};
pub use span::Span;
