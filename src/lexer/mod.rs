// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Implements the PL/SQL scanner on top of the raw [`logos`] lexer.

mod token;

use crate::keyword;
use crate::syntax::TokenKind;
use logos::Logos;
use std::ops::Range as StdRange;
use text_size::{TextRange, TextSize};
pub use token::RawToken;

/// Longest identifier Oracle accepts, in characters.
const MAX_IDENT_LEN: usize = 30;

/// Longest quoted identifier, quotation marks included.
const MAX_QUOTED_IDENT_LEN: usize = 32;

/// One scanned token.
///
/// `line` and `col` are 1-based and name the position of the token's
/// first character; `range` is the byte range within the input. The
/// `message` is set only on [`TokenKind::Error`] tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub col: u32,
    pub range: TextRange,
    pub message: Option<String>,
}

impl Token {
    fn new(kind: TokenKind, text: &str, line: u32, col: u32, range: TextRange) -> Self {
        Self {
            kind,
            text: text.to_owned(),
            line,
            col,
            range,
            message: None,
        }
    }

    fn error(text: &str, message: &str, line: u32, col: u32, range: TextRange) -> Self {
        Self {
            kind: TokenKind::Error,
            text: text.to_owned(),
            line,
            col,
            range,
            message: Some(message.to_owned()),
        }
    }
}

/// Produces one [`Token`] per call from an in-memory input.
///
/// Operates in one of two modes: *preserving* (the default) emits
/// whitespace and comment tokens; *non-preserving* silently consumes
/// them. Error tokens are emitted in both modes. Once the input is
/// exhausted, [`next_token`][`Scanner::next_token`] keeps returning an
/// end-of-file token; the [`Iterator`] impl yields it once and then
/// fuses.
pub struct Scanner<'a> {
    inner: logos::Lexer<'a, RawToken>,
    line: u32,
    col: u32,
    preserving: bool,
    pending: Option<Token>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner in preserving mode.
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: RawToken::lexer(input),
            line: 1,
            col: 1,
            preserving: true,
            pending: None,
            finished: false,
        }
    }

    /// Creates a scanner that discards whitespace and comments.
    pub fn non_preserving(input: &'a str) -> Self {
        Self {
            preserving: false,
            ..Self::new(input)
        }
    }

    /// Returns the next token, or an end-of-file token once the input
    /// is exhausted.
    pub fn next_token(&mut self) -> Token {
        if let Some(tok) = self.pending.take() {
            return tok;
        }

        loop {
            let Some(result) = self.inner.next() else {
                return self.eof_token();
            };

            let slice = self.inner.slice();
            let range = {
                let StdRange { start, end } = self.inner.span();
                TextRange::new(text_size(start), text_size(end))
            };
            let (line, col) = (self.line, self.col);
            self.advance_position(slice);

            let tok = match result {
                Ok(raw) => self.classify(raw, slice, line, col, range),
                Err(()) => classify_error(slice, line, col, range),
            };

            if !self.preserving && tok.kind.is_trivia() {
                continue;
            }
            return tok;
        }
    }

    fn eof_token(&self) -> Token {
        let end = text_size(self.inner.source().len());
        Token::new(
            TokenKind::Eof,
            "",
            self.line,
            self.col,
            TextRange::empty(end),
        )
    }

    fn advance_position(&mut self, text: &str) {
        for byte in text.bytes() {
            if byte == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn classify(
        &mut self,
        raw: RawToken,
        slice: &str,
        line: u32,
        col: u32,
        range: TextRange,
    ) -> Token {
        let kind = match raw {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Word => {
                if slice.len() > MAX_IDENT_LEN {
                    return Token::error(slice, "Identifier is too long", line, col, range);
                }
                keyword::lookup(slice)
            }
            RawToken::SQuote => classify_quoted_literal(slice),
            RawToken::SQuoteUnterminated => {
                return Token::error(
                    slice,
                    "Unterminated string or character literal",
                    line,
                    col,
                    range,
                );
            }
            RawToken::DQuote => {
                if slice.len() > MAX_QUOTED_IDENT_LEN {
                    return Token::error(slice, "Quoted identifier is too long", line, col, range);
                }
                TokenKind::QuotedIdent
            }
            RawToken::DQuoteUnterminated => {
                return Token::error(slice, "Unterminated quoted identifier", line, col, range);
            }
            RawToken::Number => TokenKind::NumberLit,
            RawToken::NumberThenRange => return self.split_number_range(slice, line, col, range),
            RawToken::NumberMalformed => {
                return Token::error(slice, "Invalid numeric literal", line, col, range);
            }
            RawToken::HyphenComment | RawToken::BlockComment => TokenKind::Comment,
            RawToken::BlockCommentUnterminated => {
                return Token::error(slice, "Unterminated C-style token", line, col, range);
            }
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Equals => TokenKind::Equals,
            RawToken::Less => TokenKind::Less,
            RawToken::Greater => TokenKind::Greater,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::SemiColon => TokenKind::SemiColon,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::AtSign => TokenKind::AtSign,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Expo => TokenKind::Expo,
            RawToken::NotEqual => TokenKind::NotEqual,
            RawToken::TildeEqual => TokenKind::TildeEqual,
            RawToken::CaretEqual => TokenKind::CaretEqual,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::RangeDots => TokenKind::RangeDots,
            RawToken::DoublePipe => TokenKind::Concat,
            RawToken::LeftLabel => TokenKind::LeftLabel,
            RawToken::RightLabel => TokenKind::RightLabel,
        };
        Token::new(kind, slice, line, col, range)
    }

    /// Splits `1..` into a numeric literal and a pending `..` token.
    /// The trailing range operator never contains a newline, so the
    /// column arithmetic is straightforward.
    fn split_number_range(&mut self, slice: &str, line: u32, col: u32, range: TextRange) -> Token {
        let number_len = slice.len() - 2;
        let split_at = range.start() + text_size(number_len);

        self.pending = Some(Token::new(
            TokenKind::RangeDots,
            "..",
            line,
            col + number_len as u32,
            TextRange::new(split_at, range.end()),
        ));

        Token::new(
            TokenKind::NumberLit,
            &slice[..number_len],
            line,
            col,
            TextRange::new(range.start(), split_at),
        )
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(tok)
    }
}

fn text_size(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}

/// A literal holding exactly one character, or one escaped quote, is a
/// character literal; everything else in single quotes is a string.
fn classify_quoted_literal(slice: &str) -> TokenKind {
    if slice.len() == 3 || slice == "''''" {
        TokenKind::CharLit
    } else {
        TokenKind::StringLit
    }
}

/// Classifies input the raw lexer rejected. The interesting cases are
/// the two-character operator leads that never got their second
/// character; anything else is either stray punctuation or a character
/// that has no business in PL/SQL source at all.
fn classify_error(slice: &str, line: u32, col: u32, range: TextRange) -> Token {
    let message = match slice.chars().next() {
        Some('!') => "'!' not followed by '='",
        Some('~') => "'~' not followed by '='",
        Some('^') => "'^' not followed by '='",
        Some('|') => "'|' not followed by '|'",
        Some(c) if c.is_ascii_punctuation() => "Unrecognized punctuation character",
        _ => "Unexpected character",
    };
    Token::error(slice, message, line, col, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Scanner::new(input).map(|t| t.kind).collect()
    }

    fn check(input: &str, kind: TokenKind) {
        let mut scanner = Scanner::new(input);
        let token = scanner.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.text, input);
    }

    #[test]
    fn scan_keywords_and_identifiers() {
        check("SELECT", TokenKind::SelectKw);
        check("select", TokenKind::SelectKw);
        check("employee", TokenKind::Ident);
        check("v$session", TokenKind::Ident);
    }

    #[test]
    fn scan_literals() {
        check("'text literal'", TokenKind::StringLit);
        check("''", TokenKind::StringLit);
        check("'x'", TokenKind::CharLit);
        check("''''", TokenKind::CharLit);
        check("\"Quoted\"", TokenKind::QuotedIdent);
        check("42", TokenKind::NumberLit);
        check("3.14", TokenKind::NumberLit);
        check(".5", TokenKind::NumberLit);
        check("1e-9", TokenKind::NumberLit);
    }

    #[test]
    fn scan_range_expression() {
        let toks: Vec<_> = Scanner::new("1..10").collect();
        assert_eq!(
            toks.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::NumberLit,
                TokenKind::RangeDots,
                TokenKind::NumberLit,
                TokenKind::Eof
            ]
        );
        assert_eq!(toks[0].text, "1");
        assert_eq!(toks[1].text, "..");
        assert_eq!(toks[1].col, 2);
        assert_eq!(toks[2].text, "10");
        assert_eq!(toks[2].col, 4);
    }

    #[test]
    fn scan_fractional_range() {
        let toks: Vec<_> = Scanner::new("1.5..2").collect();
        assert_eq!(toks[0].text, "1.5");
        assert_eq!(toks[1].kind, TokenKind::RangeDots);
        assert_eq!(toks[2].text, "2");
    }

    #[test]
    fn trailing_dot_is_part_of_number() {
        let toks: Vec<_> = Scanner::new("5. ").collect();
        assert_eq!(toks[0].kind, TokenKind::NumberLit);
        assert_eq!(toks[0].text, "5.");
    }

    #[test]
    fn identifier_too_long() {
        let word = "a".repeat(31);
        let tok = Scanner::new(&word).next_token();
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(tok.message.as_deref(), Some("Identifier is too long"));
        assert_eq!(tok.text, word);

        let ok = "a".repeat(30);
        assert_eq!(Scanner::new(&ok).next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn quoted_identifier_too_long() {
        let quoted = format!("\"{}\"", "a".repeat(31));
        let tok = Scanner::new(&quoted).next_token();
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(tok.message.as_deref(), Some("Quoted identifier is too long"));

        let ok = format!("\"{}\"", "a".repeat(30));
        assert_eq!(Scanner::new(&ok).next_token().kind, TokenKind::QuotedIdent);
    }

    #[test]
    fn unterminated_literals() {
        let tok = Scanner::new("'dangling").next_token();
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(
            tok.message.as_deref(),
            Some("Unterminated string or character literal")
        );

        let tok = Scanner::new("\"dangling").next_token();
        assert_eq!(tok.message.as_deref(), Some("Unterminated quoted identifier"));

        let tok = Scanner::new("/* dangling").next_token();
        assert_eq!(tok.message.as_deref(), Some("Unterminated C-style token"));
        assert_eq!(tok.text, "/* dangling");
    }

    #[test]
    fn invalid_numeric_literal() {
        let toks: Vec<_> = Scanner::new("1E+ x").collect();
        assert_eq!(toks[0].kind, TokenKind::Error);
        assert_eq!(toks[0].message.as_deref(), Some("Invalid numeric literal"));
        assert_eq!(toks[0].text, "1E+");
    }

    #[test]
    fn unmatched_operator_leads() {
        let tok = Scanner::new("! ").next_token();
        assert_eq!(tok.message.as_deref(), Some("'!' not followed by '='"));
        let tok = Scanner::new("~x").next_token();
        assert_eq!(tok.message.as_deref(), Some("'~' not followed by '='"));
        let tok = Scanner::new("^x").next_token();
        assert_eq!(tok.message.as_deref(), Some("'^' not followed by '='"));
        let tok = Scanner::new("|x").next_token();
        assert_eq!(tok.message.as_deref(), Some("'|' not followed by '|'"));
    }

    #[test]
    fn stray_characters() {
        let tok = Scanner::new("&").next_token();
        assert_eq!(
            tok.message.as_deref(),
            Some("Unrecognized punctuation character")
        );
    }

    #[test]
    fn two_character_operators_win_over_singles() {
        assert_eq!(
            kinds("a<=b"),
            vec![
                TokenKind::Ident,
                TokenKind::LessEqual,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("x:=y"),
            vec![
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("a<>b"),
            vec![
                TokenKind::Ident,
                TokenKind::NotEqual,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn positions_are_one_based() {
        let toks: Vec<_> = Scanner::new("a\n bb").collect();
        assert_eq!((toks[0].line, toks[0].col), (1, 1));
        // The whitespace token spans the newline.
        assert_eq!((toks[1].line, toks[1].col), (1, 2));
        assert_eq!((toks[2].line, toks[2].col), (2, 2));
        assert_eq!(toks[2].text, "bb");
    }

    #[test]
    fn non_preserving_discards_trivia() {
        let toks: Vec<_> = Scanner::non_preserving("a -- note\n /* c */ b").collect();
        assert_eq!(
            toks.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn preserving_round_trip() {
        let input = "begin -- note\n  x := 'a''b' + 1.5; /* c */\nend;\n";
        let rebuilt: String = Scanner::new(input).map(|t| t.text).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn eof_is_sticky() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }
}
