//! Lexer states.
//!
//! Each state names the kind of text the cursor is currently inside. The
//! lexer holds exactly one active state; dispatch from state to handler is
//! a single `match` in [`Lexer`](crate::Lexer), and every handler returns
//! the next state as data.

use std::fmt;

/// A state of the lexical state machine.
///
/// The machine starts in [`State::InsideSection`] and has no accepting
/// state: it runs until a terminal token (end of input or error) is
/// produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Between statements: expects a statement, comment, `}` or end of input.
    InsideSection,
    /// Start of a statement, or just after a modifier.
    Statement,
    /// Scanning the first word of a statement.
    Keyword,
    /// After the keyword: expects values, `{`, a terminator or a comment.
    Values,
    /// Scanning an unquoted value.
    Value,
    /// Inside `"..."`.
    Quote,
    /// Inside `# ...`.
    HashComment,
    /// Inside `// ...`.
    LineComment,
    /// At `/*`.
    BlockComment,
    /// Emitting a statement terminator.
    EndStatement,
    /// Emitting `{`.
    SectionStart,
}

impl State {
    /// The state a fresh lexer begins in.
    pub const INITIAL: State = State::InsideSection;

    /// Every state, for exhaustive reachability checks.
    pub const ALL: [State; 11] = [
        State::InsideSection,
        State::Statement,
        State::Keyword,
        State::Values,
        State::Value,
        State::Quote,
        State::HashComment,
        State::LineComment,
        State::BlockComment,
        State::EndStatement,
        State::SectionStart,
    ];

    /// Name of the state, for logging.
    pub fn name(self) -> &'static str {
        match self {
            State::InsideSection => "inside-section",
            State::Statement => "statement",
            State::Keyword => "keyword",
            State::Values => "values",
            State::Value => "value",
            State::Quote => "quote",
            State::HashComment => "hash-comment",
            State::LineComment => "line-comment",
            State::BlockComment => "block-comment",
            State::EndStatement => "end-statement",
            State::SectionStart => "section-start",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
