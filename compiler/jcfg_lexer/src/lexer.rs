//! The lexical state machine.
//!
//! [`Lexer`] turns configuration text into [`Token`]s on demand. Each call
//! to [`Lexer::next_token`] runs state handlers until exactly one token has
//! been emitted. The last token is always either [`TokenKind::Eof`] or
//! [`TokenKind::Error`]; after it the lexer yields `None`.
//!
//! # Statement shape
//!
//! ```text
//! section     := (statement | comment)*
//! statement   := modifier? keyword (value* | '{' section '}') terminator
//! terminator  := ';' | '\n' | <empty-at-eof> | <implicit-before-comment>
//! ```
//!
//! A run of letters, digits, `_` and `-` is the unit for both keywords and
//! values. The first run of a statement is the keyword, later runs before
//! a terminator are values. A run immediately followed by `:` is a modifier.
//!
//! Every statement gets an [`TokenKind::EndStatement`] token whose text
//! records how it ended: `";"`, `"\n"`, or `""` when the end was implied by
//! end of input or a trailing comment. Braces are not balanced here; that
//! is the tree builder's job.

use jcfg_lexer_core::{line_col, Cursor, Span};
use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::lex_error::{LexError, LexErrorKind};
use crate::state::State;
use crate::token::{Token, TokenKind};

const LINE_COMMENT: &str = "//";
const HASH_COMMENT: char = '#';
const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Returns `true` for runes that make up keywords, values and modifiers:
/// `_`, `-`, letters (`L*`) and decimal digits (`Nd`).
///
/// Other numerics (`²`, `½`, `Ⅻ`) and combining marks are not word runes.
#[inline]
pub fn is_word_char(c: char) -> bool {
    match c {
        '_' | '-' | 'a'..='z' | 'A'..='Z' | '0'..='9' => true,
        c if c.is_ascii() => false,
        c => matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
        ),
    }
}

/// Outcome of running one state handler.
enum Step<'src> {
    /// Move to the next state without emitting.
    Goto(State),
    /// Emit a token, then move to the next state.
    Emit(Token<'src>, State),
    /// Emit the terminal token and stop.
    Halt(Token<'src>),
}

/// Pull-based lexer over one configuration text.
pub struct Lexer<'src> {
    /// Diagnostic name of the input.
    name: &'src str,
    cursor: Cursor<'src>,
    /// Active state; `None` once the terminal token has been emitted.
    state: Option<State>,
    error: Option<LexError>,
}

/// Create a lexer over `input`. `name` is used only in diagnostics.
pub fn lex<'src>(name: &'src str, input: &'src str) -> Lexer<'src> {
    Lexer::new(name, input)
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `input`. `name` is used only in diagnostics.
    pub fn new(name: &'src str, input: &'src str) -> Self {
        Lexer {
            name,
            cursor: Cursor::new(input),
            state: Some(State::INITIAL),
            error: None,
        }
    }

    /// Diagnostic name of the input.
    pub fn name(&self) -> &'src str {
        self.name
    }

    /// The input being scanned.
    pub fn input(&self) -> &'src str {
        self.cursor.src()
    }

    /// The active state, or `None` once the stream has ended.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// The error that halted the scan, if it halted on one.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Consume the lexer, returning the error that halted it, if any.
    pub fn into_error(self) -> Option<LexError> {
        self.error
    }

    /// 1-based `(line, column)` of a byte offset in the input.
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        line_col(self.cursor.src(), pos)
    }

    /// Produce the next token, or `None` after the terminal token.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        while self.state.is_some() {
            if let Some(token) = self.step() {
                return Some(token);
            }
        }
        None
    }

    /// Run the active state's handler once, returning the token it emitted.
    pub(crate) fn step(&mut self) -> Option<Token<'src>> {
        let state = self.state?;
        let step = match state {
            State::InsideSection => self.inside_section(),
            State::Statement => self.statement(),
            State::Keyword => self.keyword(),
            State::Values => self.values(),
            State::Value => self.value(),
            State::Quote => self.quote(),
            State::HashComment => self.line_to_end(TokenKind::HashComment),
            State::LineComment => self.line_to_end(TokenKind::LineComment),
            State::BlockComment => self.block_comment(),
            State::EndStatement => self.emit_then(TokenKind::EndStatement, State::InsideSection),
            State::SectionStart => self.emit_then(TokenKind::SectionStart, State::InsideSection),
        };
        match step {
            Step::Goto(next) => {
                self.state = Some(next);
                None
            }
            Step::Emit(token, next) => {
                trace!(kind = %token.kind, pos = token.pos, text = %token.text, next = %next, "emit");
                self.state = Some(next);
                Some(token)
            }
            Step::Halt(token) => {
                trace!(kind = %token.kind, pos = token.pos, "halt");
                self.state = None;
                Some(token)
            }
        }
    }

    // ─── Emission ───────────────────────────────────────────────────

    /// Take the pending text as a token of `kind`.
    fn emit(&mut self, kind: TokenKind) -> Token<'src> {
        let (pos, text) = self.cursor.take_pending();
        Token::new(kind, pos, text)
    }

    fn emit_then(&mut self, kind: TokenKind, next: State) -> Step<'src> {
        Step::Emit(self.emit(kind), next)
    }

    /// Record `kind` as the scan's error and halt with an error token.
    fn fail(&mut self, kind: LexErrorKind) -> Step<'src> {
        let span: Span = self.cursor.pending_span();
        let error = LexError::new(self.name, kind, span, self.cursor.src());
        debug!(name = self.name, %span, error = %error.kind, "lex error");
        let token = Token::new(TokenKind::Error, span.start, error.message());
        self.error = Some(error);
        Step::Halt(token)
    }

    // ─── States ─────────────────────────────────────────────────────

    fn inside_section(&mut self) -> Step<'src> {
        if self.cursor.starts_with(LINE_COMMENT) {
            return Step::Goto(State::LineComment);
        }
        if self.cursor.starts_with(BLOCK_COMMENT_OPEN) {
            return Step::Goto(State::BlockComment);
        }
        match self.cursor.advance() {
            None => Step::Halt(self.emit(TokenKind::Eof)),
            Some(HASH_COMMENT) => {
                self.cursor.backup();
                Step::Goto(State::HashComment)
            }
            Some('}') => self.emit_then(TokenKind::SectionEnd, State::InsideSection),
            Some(c) if is_word_char(c) => {
                self.cursor.backup();
                Step::Goto(State::Statement)
            }
            Some(c) if c.is_whitespace() => {
                self.cursor.ignore();
                Step::Goto(State::InsideSection)
            }
            Some(found) => self.fail(LexErrorKind::InvalidStatement { found }),
        }
    }

    fn statement(&mut self) -> Step<'src> {
        match self.cursor.advance() {
            // Only reachable after a modifier with no keyword behind it:
            // emit an empty keyword so the terminator still has one.
            None => self.emit_then(TokenKind::Keyword, State::EndStatement),
            Some(';') => {
                self.cursor.backup();
                let keyword = self.emit(TokenKind::Keyword);
                self.cursor.advance();
                Step::Emit(keyword, State::EndStatement)
            }
            Some(c) if c.is_whitespace() => {
                self.cursor.skip_whitespace();
                Step::Goto(State::Statement)
            }
            Some(c) if is_word_char(c) => Step::Goto(State::Keyword),
            Some(found) => self.fail(LexErrorKind::InvalidStatement { found }),
        }
    }

    fn keyword(&mut self) -> Step<'src> {
        self.cursor.eat_while(is_word_char);
        if self.cursor.peek() == Some(':') {
            let modifier = self.emit(TokenKind::Modifier);
            self.cursor.advance();
            self.cursor.ignore();
            return Step::Emit(modifier, State::Statement);
        }
        self.emit_then(TokenKind::Keyword, State::Values)
    }

    fn values(&mut self) -> Step<'src> {
        match self.cursor.advance() {
            Some('"') => Step::Goto(State::Quote),
            Some('{') => Step::Goto(State::SectionStart),
            None | Some(';' | '\n') => Step::Goto(State::EndStatement),
            Some('/') => {
                if self.cursor.peek() != Some('/') {
                    return self.fail(LexErrorKind::MalformedCommentOpener);
                }
                self.cursor.backup();
                self.emit_then(TokenKind::EndStatement, State::LineComment)
            }
            Some(HASH_COMMENT) => {
                self.cursor.backup();
                self.emit_then(TokenKind::EndStatement, State::HashComment)
            }
            Some(c) if c.is_whitespace() => {
                self.cursor.skip_horizontal_whitespace();
                Step::Goto(State::Values)
            }
            Some(c) if is_word_char(c) => Step::Goto(State::Value),
            Some(found) => self.fail(LexErrorKind::InvalidValue { found }),
        }
    }

    fn value(&mut self) -> Step<'src> {
        self.cursor.eat_while(is_word_char);
        self.emit_then(TokenKind::Value, State::Values)
    }

    /// Scan to the closing quote. The opening `"` is already consumed.
    fn quote(&mut self) -> Step<'src> {
        loop {
            match self.cursor.advance() {
                Some('\\') => {
                    if self.cursor.advance().is_none() {
                        return self.fail(LexErrorKind::UnterminatedQuote);
                    }
                }
                None => return self.fail(LexErrorKind::UnterminatedQuote),
                Some('"') => break,
                Some(_) => {}
            }
        }
        self.emit_then(TokenKind::Value, State::Values)
    }

    /// Hash and line comments run through the next newline.
    fn line_to_end(&mut self, kind: TokenKind) -> Step<'src> {
        self.cursor.eat_line();
        self.emit_then(kind, State::InsideSection)
    }

    fn block_comment(&mut self) -> Step<'src> {
        self.cursor.advance_bytes(BLOCK_COMMENT_OPEN.len());
        let Some(offset) = self.cursor.find(BLOCK_COMMENT_CLOSE) else {
            return self.fail(LexErrorKind::UnclosedBlockComment);
        };
        self.cursor.advance_bytes(offset + BLOCK_COMMENT_CLOSE.len());
        self.emit_then(TokenKind::BlockComment, State::InsideSection)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
