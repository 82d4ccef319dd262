// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Implements the logical-line assembler.
//!
//! A logical line is a maximal run of tokens that belong together, to
//! be rendered as one or more physical lines. Assembly works from two
//! per-kind likelihoods: how likely a kind *ends* a line and how likely
//! a kind *starts* one. A few kinds need a second token of context to
//! decide, which is what the one-token peek buffer is for.

use crate::format::tables::{finality, firstness, Probability};
use crate::lexer::{Scanner, Token};
use crate::syntax::TokenKind;

/// One token of a logical line plus its formatting annotations.
///
/// `spacer` is the number of blanks before the token, filled in by the
/// writer's spacing pass. `lf` starts the token on a fresh physical
/// line. `indent_change` is added to the global indent depth at the
/// moment the token is written.
#[derive(Debug)]
pub struct LineNode {
    pub kind: TokenKind,
    pub spacer: u8,
    pub lf: bool,
    pub indent_change: i32,
    pub token: Token,
}

impl LineNode {
    fn new(token: Token) -> Self {
        Self {
            kind: token.kind,
            spacer: 0,
            lf: false,
            indent_change: 0,
            token,
        }
    }
}

/// An assembled logical line.
#[derive(Debug, Default)]
pub struct LogicalLine {
    pub nodes: Vec<LineNode>,
}

impl LogicalLine {
    fn push(&mut self, token: Token) {
        self.nodes.push(LineNode::new(token));
    }

    /// Kind of the first token, or [`TokenKind::None`] when empty.
    pub fn first_kind(&self) -> TokenKind {
        self.nodes.first().map_or(TokenKind::None, |n| n.kind)
    }

    /// Kind of the last token, or [`TokenKind::None`] when empty.
    pub fn last_kind(&self) -> TokenKind {
        self.nodes.last().map_or(TokenKind::None, |n| n.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Pulls tokens from a [`Scanner`] and groups them into [`LogicalLine`]s.
///
/// Whitespace tokens are discarded here; comments survive and either
/// continue the current line (when written on the same source line) or
/// open a fresh one.
pub struct LogicalLines<'a> {
    scanner: Scanner<'a>,
    lookahead: Option<Token>,
    finished: bool,
}

impl<'a> LogicalLines<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            lookahead: None,
            finished: false,
        }
    }

    /// Next non-whitespace token, consuming the peek buffer first.
    fn next_significant(&mut self) -> Token {
        if let Some(token) = self.lookahead.take() {
            return token;
        }
        loop {
            let token = self.scanner.next_token();
            if token.kind != TokenKind::Whitespace {
                return token;
            }
        }
    }

    /// Peeks at the next non-whitespace token without consuming it.
    fn peek(&mut self) -> &Token {
        let scanner = &mut self.scanner;
        self.lookahead.get_or_insert_with(|| loop {
            let token = scanner.next_token();
            if token.kind != TokenKind::Whitespace {
                break token;
            }
        })
    }

    /// Assembles the next logical line. The line always holds at least
    /// one token; the last line ends with the end-of-file token.
    pub fn next_line(&mut self) -> LogicalLine {
        let mut line = LogicalLine::default();

        loop {
            let token = self.next_significant();
            let kind = token.kind;
            let source_line = token.line;
            line.push(token);

            if finality(kind) == Probability::Always {
                break;
            }

            let first_kind = line.first_kind();
            let next = self.peek();

            // A comment typed on its own source line opens a fresh
            // logical line.
            if next.kind == TokenKind::Comment && next.line != source_line {
                break;
            }

            let next_kind = next.kind;
            if firstness(next_kind) == Probability::Always {
                break;
            }

            match finality(kind) {
                Probability::Usually
                    if !matches!(next_kind, TokenKind::Eof | TokenKind::Comment) =>
                {
                    break;
                }
                Probability::Sometimes if sometimes_final(kind, first_kind, next_kind) => {
                    break;
                }
                _ => {}
            }

            if firstness(next_kind) == Probability::Sometimes && sometimes_first(kind, next_kind) {
                break;
            }
        }

        line
    }
}

impl Iterator for LogicalLines<'_> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let line = self.next_line();
        if line.last_kind() == TokenKind::Eof {
            self.finished = true;
        }
        Some(line)
    }
}

/// Disambiguates the kinds whose finality is `Sometimes`.
fn sometimes_final(kind: TokenKind, first_kind: TokenKind, next_kind: TokenKind) -> bool {
    match kind {
        // IS NOT NULL / IS NULL continue the line.
        TokenKind::IsKw => !matches!(next_kind, TokenKind::NotKw | TokenKind::NullKw),
        // LOOP ends the line when it closes a FOR or bare LOOP header.
        TokenKind::LoopKw => matches!(first_kind, TokenKind::ForKw | TokenKind::LoopKw),
        TokenKind::SelectKw => !matches!(next_kind, TokenKind::AllKw | TokenKind::DistinctKw),
        TokenKind::UnionKw => next_kind != TokenKind::AllKw,
        _ => false,
    }
}

/// Disambiguates the kinds whose firstness is `Sometimes`: INTO starts
/// a line except directly after INSERT.
fn sometimes_first(kind: TokenKind, next_kind: TokenKind) -> bool {
    match next_kind {
        TokenKind::IntoKw => kind != TokenKind::InsertKw,
        _ => false,
    }
}
