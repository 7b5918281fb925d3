//! Byte offset to line/column mapping.
//!
//! Positions are recomputed from the source on every call rather than
//! tracked incrementally while scanning. This keeps `backup()` and `peek()`
//! free of bookkeeping: a newline that is read and then backed over is
//! never double counted.
//!
//! Both numbers are 1-based. Columns count characters, not bytes, so a
//! multi-byte rune occupies a single column.

use crate::span::saturate;

/// Clamp `pos` to the source length.
fn clamp(src: &str, pos: u32) -> usize {
    (pos as usize).min(src.len())
}

/// 1-based line containing byte offset `pos`.
pub fn line_number(src: &str, pos: u32) -> u32 {
    let prefix = &src.as_bytes()[..clamp(src, pos)];
    1 + saturate(memchr::memchr_iter(b'\n', prefix).count())
}

/// 1-based column of byte offset `pos` within its line, counted in characters.
pub fn column_number(src: &str, pos: u32) -> u32 {
    let prefix = &src.as_bytes()[..clamp(src, pos)];
    let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);
    // Count leading bytes only; continuation bytes (0b10xx_xxxx) belong to
    // the preceding character.
    let chars = prefix[line_start..]
        .iter()
        .filter(|&&b| (b & 0xC0) != 0x80)
        .count();
    1 + saturate(chars)
}

/// 1-based `(line, column)` of byte offset `pos`.
pub fn line_col(src: &str, pos: u32) -> (u32, u32) {
    (line_number(src, pos), column_number(src, pos))
}
