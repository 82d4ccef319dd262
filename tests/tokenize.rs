// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Scanner guarantees over realistic inputs: lossless round-tripping,
//! token conservation in non-preserving mode, keyword canonicality and
//! position accuracy.

use plsfmt::{keyword, Scanner, TokenKind};
use pretty_assertions::assert_eq;

const FIXTURES: &[&str] = &[
    include_str!("fixtures/add_job_history.sql"),
    include_str!("fixtures/secure_dml.sql"),
    include_str!("fixtures/monthly_report.sql"),
];

#[test]
fn preserving_mode_round_trips() {
    for input in FIXTURES {
        let rebuilt: String = Scanner::new(input).map(|t| t.text).collect();
        assert_eq!(&rebuilt, input);
    }
}

#[test]
fn non_preserving_mode_conserves_significant_tokens() {
    for input in FIXTURES {
        let significant: Vec<_> = Scanner::new(input)
            .filter(|t| !t.kind.is_trivia())
            .map(|t| (t.kind, t.text))
            .collect();
        let stripped: Vec<_> = Scanner::non_preserving(input)
            .map(|t| (t.kind, t.text))
            .collect();
        assert_eq!(stripped, significant);
    }
}

#[test]
fn keywords_are_canonical() {
    for input in FIXTURES {
        for token in Scanner::non_preserving(input) {
            if token.kind.is_keyword() {
                let canonical = keyword::canonical_name(token.kind).unwrap();
                assert_eq!(token.text.to_ascii_uppercase(), canonical);
            } else if token.kind == TokenKind::Ident {
                assert_eq!(keyword::lookup(&token.text), TokenKind::Ident);
            }
        }
    }
}

#[test]
fn positions_match_the_input_bytes() {
    for input in FIXTURES {
        for token in Scanner::new(input) {
            let start = usize::from(token.range.start());
            let end = usize::from(token.range.end());
            assert_eq!(&input[start..end], token.text);

            let prefix = &input[..start];
            let line = 1 + prefix.matches('\n').count() as u32;
            let col = 1 + prefix
                .rsplit_once('\n')
                .map_or(prefix.len(), |(_, tail)| tail.len()) as u32;
            assert_eq!((token.line, token.col), (line, col), "token {token:?}");
        }
    }
}

#[test]
fn fixture_scan_is_error_free() {
    for input in FIXTURES {
        for token in Scanner::new(input) {
            assert_ne!(token.kind, TokenKind::Error, "{:?}", token);
        }
    }
}
