//! Lexer error types.
//!
//! Every lexical error is fatal to the scan that produced it. The state
//! machine emits one [`TokenKind::Error`](crate::TokenKind::Error) token
//! carrying the [`LexErrorKind`] message and halts; the structured
//! [`LexError`] is kept on the lexer for callers that want spans and
//! line/column information.

use jcfg_lexer_core::{line_col, Span};

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Character that cannot begin a statement, comment or `}`.
    #[error("invalid statement: {found:?}")]
    InvalidStatement { found: char },
    /// Character that cannot appear among a statement's values.
    #[error("invalid character in values: {found:?}")]
    InvalidValue { found: char },
    /// End of input inside `"..."`, including after a trailing `\`.
    #[error("unterminated quoted string")]
    UnterminatedQuote,
    /// `/*` with no matching `*/`.
    #[error("unclosed comment")]
    UnclosedBlockComment,
    /// `/` among values not followed by a second `/`.
    #[error("invalid input (missing second / for comment)")]
    MalformedCommentOpener,
}

/// A lexer error with its location.
///
/// Displays as `name:line:column: message`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{name}:{line}:{column}: {kind}")]
pub struct LexError {
    /// Diagnostic name of the input (usually a file name).
    pub name: String,
    pub kind: LexErrorKind,
    /// From the start of the failing token to where scanning stopped.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based column of `span.start`.
    pub column: u32,
}

impl LexError {
    /// Create an error, resolving the line and column of `span.start` in `src`.
    pub fn new(name: impl Into<String>, kind: LexErrorKind, span: Span, src: &str) -> Self {
        let (line, column) = line_col(src, span.start);
        LexError {
            name: name.into(),
            kind,
            span,
            line,
            column,
        }
    }

    /// The message carried by the error token.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
