//! Property-based tests for the configuration lexer.
//!
//! Generated inputs check the stream-level guarantees:
//! 1. Every stream ends with exactly one terminal token, and nothing after it.
//! 2. Non-error token text is the exact input slice at the token position.
//! 3. Well-formed configurations lex without error, and every significant
//!    character lands in exactly one token.
//! 4. Nested sections produce correctly nested brace tokens.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    reason = "Proptest macros generate code with these patterns"
)]

use jcfg_lexer::{Lexer, Token, TokenKind};
use proptest::prelude::*;

// -- Generation Strategies --

/// A keyword or unquoted value.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,10}").unwrap()
}

/// A quoted value without newlines.
fn quoted_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\"([a-z0-9 *./:]|\\\\\")*\"").unwrap()
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![3 => word_strategy(), 1 => quoted_strategy()]
}

fn terminator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(";"), Just("\n"), Just(" ;"), Just(";\n")]
}

fn comment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("# [a-z ]{0,12}\n").unwrap(),
        prop::string::string_regex("// [a-z ]{0,12}\n").unwrap(),
        prop::string::string_regex("/\\* [a-z \n]{0,12} \\*/\n").unwrap(),
    ]
}

/// A single statement: optional modifier, keyword, values, terminator.
fn statement_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(word_strategy()),
        word_strategy(),
        prop::collection::vec(value_strategy(), 0..4),
        terminator_strategy(),
    )
        .prop_map(|(modifier, keyword, values, terminator)| {
            let mut out = String::new();
            if let Some(modifier) = modifier {
                out.push_str(&modifier);
                out.push_str(": ");
            }
            out.push_str(&keyword);
            for value in values {
                out.push(' ');
                out.push_str(&value);
            }
            out.push_str(terminator);
            out
        })
}

/// A configuration body: statements, comments and nested sections.
fn config_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![3 => statement_strategy(), 1 => comment_strategy()];
    leaf.prop_recursive(4, 48, 6, |inner| {
        (word_strategy(), prop::collection::vec(inner, 0..6)).prop_map(|(keyword, body)| {
            format!("{keyword} {{\n{}}}\n", body.concat())
        })
    })
}

fn collect(input: &str) -> Vec<Token<'_>> {
    Lexer::new("prop", input).collect()
}

/// Byte offsets covered by non-error token text.
fn covered(input: &str, tokens: &[Token<'_>]) -> Vec<u32> {
    let mut counts = vec![0u32; input.len()];
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Error) {
        for i in token.span().to_range() {
            counts[i] += 1;
        }
    }
    counts
}

proptest! {
    #[test]
    fn stream_ends_with_exactly_one_terminal(input in "\\PC{0,80}") {
        let tokens = collect(&input);
        prop_assert!(!tokens.is_empty());
        let terminals = tokens.iter().filter(|t| t.is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert!(tokens.last().is_some_and(Token::is_terminal));
    }

    #[test]
    fn config_like_noise_ends_with_one_terminal(
        input in "[a-z0-9 ;:{}\"#/*\\\\\n.=-]{0,80}"
    ) {
        let tokens = collect(&input);
        let terminals = tokens.iter().filter(|t| t.is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert!(tokens.last().is_some_and(Token::is_terminal));
    }

    #[test]
    fn token_text_is_input_slice(input in "[a-z0-9 ;:{}\"#/*\\\\\n-]{0,80}") {
        for token in collect(&input) {
            if token.kind == TokenKind::Error {
                continue;
            }
            let range = token.span().to_range();
            prop_assert_eq!(&input[range], &*token.text);
        }
    }

    #[test]
    fn token_positions_are_ordered(input in config_strategy()) {
        let tokens = collect(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span().end <= pair[1].pos, "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn well_formed_config_lexes_cleanly(input in config_strategy()) {
        let tokens = collect(&input);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));
    }

    #[test]
    fn significant_characters_appear_in_exactly_one_token(input in config_strategy()) {
        let tokens = collect(&input);
        let counts = covered(&input, &tokens);
        for (i, c) in input.char_indices() {
            if c.is_whitespace() || c == ':' {
                continue;
            }
            prop_assert_eq!(counts[i], 1, "byte {} ({:?}) in {:?}", i, c, input);
        }
    }

    #[test]
    fn every_statement_has_a_terminator(input in config_strategy()) {
        let tokens = collect(&input);
        let keywords = tokens.iter().filter(|t| t.kind == TokenKind::Keyword).count();
        let sections = tokens.iter().filter(|t| t.kind == TokenKind::SectionStart).count();
        let terminators = tokens.iter().filter(|t| t.kind == TokenKind::EndStatement).count();
        prop_assert_eq!(keywords, sections + terminators);
    }

    #[test]
    fn nested_sections_are_bracket_matched(depth in 1usize..24) {
        let mut input = String::new();
        for level in 0..depth {
            input.push_str(&format!("level{level} {{\n"));
        }
        input.push_str("leaf;\n");
        for _ in 0..depth {
            input.push_str("}\n");
        }

        let tokens = collect(&input);
        let mut open = Vec::new();
        let mut pairs = 0;
        for token in &tokens {
            match token.kind {
                TokenKind::SectionStart => open.push(token.pos),
                TokenKind::SectionEnd => {
                    let start = open.pop();
                    prop_assert!(start.is_some_and(|s| s < token.pos));
                    pairs += 1;
                }
                _ => {}
            }
        }
        prop_assert!(open.is_empty());
        prop_assert_eq!(pairs, depth);
    }

    #[test]
    fn generated_config_brackets_match(input in config_strategy()) {
        let mut depth = 0i32;
        for token in collect(&input) {
            match token.kind {
                TokenKind::SectionStart => depth += 1,
                TokenKind::SectionEnd => {
                    depth -= 1;
                    prop_assert!(depth >= 0);
                }
                _ => {}
            }
        }
        prop_assert_eq!(depth, 0);
    }
}
