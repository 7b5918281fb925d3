//! Threaded token stream.
//!
//! [`spawn_lexer`] runs a [`Lexer`] on its own thread and hands tokens to a
//! single consumer over a zero-capacity channel: each send blocks until the
//! consumer receives, so at most one token is in flight and delivery is
//! strictly in emission order.
//!
//! The producer stops after sending the terminal token. If the consumer
//! drops its [`TokenReceiver`] first, the channel disconnects, the blocked
//! send fails, and the producer exits instead of waiting forever.
//!
//! Most callers want the synchronous [`Lexer`] iterator; this form exists
//! for consumers that pull from another thread.

use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::debug;

use crate::lexer::Lexer;
use crate::token::Token;

/// Consumer side of a threaded token stream.
pub struct TokenReceiver {
    tokens: Receiver<Token<'static>>,
    producer: JoinHandle<()>,
}

/// Start lexing `input` on a producer thread.
pub fn spawn_lexer(name: impl Into<String>, input: impl Into<String>) -> TokenReceiver {
    let name = name.into();
    let input = input.into();
    let (tx, rx) = channel::bounded(0);
    let producer = thread::spawn(move || produce(&name, &input, &tx));
    TokenReceiver {
        tokens: rx,
        producer,
    }
}

fn produce(name: &str, input: &str, tx: &Sender<Token<'static>>) {
    for token in Lexer::new(name, input) {
        if tx.send(token.into_owned()).is_err() {
            debug!(name, "token receiver dropped, stopping producer");
            return;
        }
    }
}

impl TokenReceiver {
    /// Block until the next token arrives.
    ///
    /// Returns `None` once the terminal token has been received.
    pub fn next_token(&self) -> Option<Token<'static>> {
        self.tokens.recv().ok()
    }

    /// Stop consuming and wait for the producer thread to exit.
    ///
    /// Safe to call before the stream is drained: dropping the receiver
    /// wakes a producer blocked on send.
    pub fn close(self) -> thread::Result<()> {
        let TokenReceiver { tokens, producer } = self;
        drop(tokens);
        producer.join()
    }
}

impl Iterator for TokenReceiver {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
