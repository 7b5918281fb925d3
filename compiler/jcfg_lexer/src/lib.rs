//! Tokenizer for Junos-style curly-brace configuration text.
//!
//! Turns text such as
//!
//! ```text
//! system {
//!     replace: host-name r1;
//!     syslog { file messages { any notice; } }
//! }
//! ```
//!
//! into a linear stream of [`Token`]s (keywords, values, modifiers,
//! terminators, braces and comments) for a downstream tree builder.
//!
//! - [`Lexer`] is the pull-based stream: each `next_token()` call runs the
//!   state machine until one token is emitted.
//! - [`spawn_lexer`] runs the same lexer on a producer thread behind a
//!   rendezvous channel.
//! - [`tokenize`] collects a whole input, turning an error token into `Err`.
//!
//! Every stream ends with exactly one [`TokenKind::Eof`] or
//! [`TokenKind::Error`] token.

mod lex_error;
mod lexer;
mod state;
mod stream;
mod token;

use std::sync::Once;

pub use jcfg_lexer_core::Span;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{is_word_char, lex, Lexer};
pub use state::State;
pub use stream::{spawn_lexer, TokenReceiver};
pub use token::{Token, TokenKind};

/// Lex all of `input`.
///
/// Returns every token through the final [`TokenKind::Eof`], or the error
/// that halted the scan.
#[tracing::instrument(level = "debug", skip_all, fields(name = %name, len = input.len()))]
pub fn tokenize<'src>(name: &'src str, input: &'src str) -> Result<Vec<Token<'src>>, LexError> {
    let mut lexer = Lexer::new(name, input);
    let tokens: Vec<Token<'src>> = lexer.by_ref().collect();
    match lexer.into_error() {
        Some(error) => Err(error),
        None => {
            tracing::debug!(tokens = tokens.len(), "lex complete");
            Ok(tokens)
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for lexer diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, and only installs once per
/// process. `RUST_LOG=jcfg_lexer=debug` logs errors and scan summaries;
/// `RUST_LOG=jcfg_lexer=trace` logs every emitted token. A bare level such
/// as `RUST_LOG=trace` is narrowed to this crate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("RUST_LOG") else {
            return;
        };
        let filter = lexer_filter(&directives);
        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

/// Build the env filter for `directives`, scoping a bare level to the
/// lexer crate.
fn lexer_filter(directives: &str) -> tracing_subscriber::EnvFilter {
    let directives = directives.trim();
    let scoped = if directives.parse::<tracing::Level>().is_ok() {
        format!("{}={directives}", env!("CARGO_CRATE_NAME"))
    } else {
        directives.to_owned()
    };
    tracing_subscriber::EnvFilter::new(scoped)
}
