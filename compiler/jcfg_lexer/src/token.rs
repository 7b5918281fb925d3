//! Token types produced by the configuration lexer.

use std::borrow::Cow;
use std::fmt;

use jcfg_lexer_core::Span;

/// Kind of a lexed token.
///
/// Closed set. `QuotedValue`, `ListStart` and `ListEnd` are reserved for
/// the tree builder: the lexer never emits them (quoted strings are
/// emitted as [`TokenKind::Value`] with their quotes kept in the text).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Scan failed; the token text is the error message.
    Error,
    /// End of input.
    Eof,
    /// First word of a statement. Starts a value list or a section.
    Keyword,
    /// Word (or quoted string) following a keyword.
    Value,
    /// Quoted value. Reserved.
    QuotedValue,
    /// Statement terminator: `;`, `\n`, or empty when implied.
    EndStatement,
    /// `{`
    SectionStart,
    /// `}`
    SectionEnd,
    /// `// ...` to end of line.
    LineComment,
    /// `# ...` to end of line.
    HashComment,
    /// `/* ... */`, possibly spanning lines.
    BlockComment,
    /// Word followed by `:` before a statement, e.g. `deactivate:`.
    Modifier,
    /// `[`. Reserved.
    ListStart,
    /// `]`. Reserved.
    ListEnd,
}

impl TokenKind {
    /// Human-readable name of this kind.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
            TokenKind::Keyword => "keyword",
            TokenKind::Value => "value",
            TokenKind::QuotedValue => "quoted value",
            TokenKind::EndStatement => "end of statement",
            TokenKind::SectionStart => "section start",
            TokenKind::SectionEnd => "section end",
            TokenKind::LineComment => "line comment",
            TokenKind::HashComment => "hash comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Modifier => "modifier",
            TokenKind::ListStart => "list start",
            TokenKind::ListEnd => "list end",
        }
    }

    /// Returns `true` for the kinds that end a token stream.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::Eof)
    }

    /// Returns `true` for the three comment kinds.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::HashComment | TokenKind::BlockComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexed token.
///
/// For every kind except [`TokenKind::Error`], `text` is borrowed from the
/// input and equals `input[pos..pos + text.len()]`. Error tokens own their
/// message; `pos` is where the failing token started.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Byte offset of the token in the input.
    pub pos: u32,
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    /// Create a token.
    pub fn new(kind: TokenKind, pos: u32, text: impl Into<Cow<'src, str>>) -> Self {
        Token {
            kind,
            pos,
            text: text.into(),
        }
    }

    /// Byte span covered by the token's literal text.
    ///
    /// Not meaningful for error tokens, whose text is a message.
    pub fn span(&self) -> Span {
        let len = u32::try_from(self.text.len()).unwrap_or(u32::MAX);
        Span::new(self.pos, self.pos.saturating_add(len))
    }

    /// Returns `true` if this token ends the stream.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Detach the token from the input it borrows.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            pos: self.pos,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.kind, self.text)
    }
}
