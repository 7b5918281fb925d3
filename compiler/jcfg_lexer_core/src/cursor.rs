//! Rune cursor over configuration text.
//!
//! The cursor tracks two offsets into the source: `start`, where the token
//! currently being scanned began, and `pos`, the read position. Text between
//! the two is the *pending* token. The state machine advances `pos` rune by
//! rune and, once it has classified the pending text, takes it with
//! [`Cursor::take_pending`] (which moves `start` up to `pos`) or throws it
//! away with [`Cursor::ignore`].
//!
//! # Backup
//!
//! [`Cursor::backup`] undoes exactly the last [`Cursor::advance`], using the
//! byte width of the rune that was decoded. A second `backup()` without an
//! intervening `advance()` is a no-op, as is `backup()` after `advance()`
//! returned `None`.
//!
//! End of input is reported as `None` rather than a sentinel rune, so no
//! character in the source can be mistaken for it.

use crate::span::{saturate, Span};

/// Rune cursor with a pending-token start offset.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    src: &'src str,
    /// Byte offset where the pending token starts.
    start: usize,
    /// Current read position (byte offset into `src`).
    pos: usize,
    /// Byte width of the rune returned by the last `advance()`; zero when
    /// there is nothing to back up over.
    width: usize,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at offset 0.
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// The full source text.
    #[inline]
    pub fn src(&self) -> &'src str {
        self.src
    }

    /// Byte offset where the pending token starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every rune has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Consume and return the next rune, or `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let Some(c) = self.rest().chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = c.len_utf8();
        self.pos += self.width;
        Some(c)
    }

    /// Step back over the rune returned by the last [`advance`](Self::advance).
    #[inline]
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Return the next rune without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Discard the pending text: the next token starts at the cursor.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Returns `true` if the unread input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance while `pred` returns `true` for the next rune.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advance over a run of whitespace, newlines included, and discard it.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
        self.ignore();
    }

    /// Advance over whitespace other than `\n` and discard it.
    ///
    /// Used where a newline is significant (it terminates a statement).
    pub fn skip_horizontal_whitespace(&mut self) {
        self.eat_while(|c| c != '\n' && c.is_whitespace());
        self.ignore();
    }

    /// Advance through the next `\n` (inclusive), or to end of input if
    /// there is none.
    pub fn eat_line(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.src.len(),
        }
        self.width = 0;
    }

    /// Byte offset of `needle` relative to the cursor, if it occurs in the
    /// unread input.
    pub fn find(&self, needle: &str) -> Option<usize> {
        memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes())
    }

    /// Advance `n` bytes.
    ///
    /// # Contract
    ///
    /// `pos + n` must land on a character boundary within the source. This
    /// holds when `n` is derived from [`find`](Self::find) or the byte
    /// length of a matched ASCII prefix.
    pub fn advance_bytes(&mut self, n: usize) {
        debug_assert!(
            self.src.is_char_boundary(self.pos + n),
            "advance_bytes({n}) from {} splits a character",
            self.pos
        );
        self.pos += n;
        self.width = 0;
    }

    /// The pending token text (from `start` up to the cursor).
    #[inline]
    pub fn pending(&self) -> &'src str {
        &self.src[self.start..self.pos]
    }

    /// Span of the pending token text.
    #[inline]
    pub fn pending_span(&self) -> Span {
        Span::from_range(self.start..self.pos)
    }

    /// Take the pending text and begin a new token at the cursor.
    ///
    /// Returns the start offset and the text.
    pub fn take_pending(&mut self) -> (u32, &'src str) {
        let start = saturate(self.start);
        let text = self.pending();
        self.start = self.pos;
        (start, text)
    }
}
