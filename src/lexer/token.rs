// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Raw token definition for the [`logos`] lexer.
//!
//! The raw kinds are purely lexical shapes. The [`Scanner`][`super::Scanner`]
//! turns them into public [`TokenKind`][`crate::syntax::TokenKind`]s:
//! words are resolved against the keyword table, single-quoted literals
//! are split into string/character literals, length limits are applied,
//! and the unterminated shapes become error tokens with a message.
//!
//! The unterminated shapes carry their own patterns so that a dangling
//! literal or block comment consumes its text up to end of input instead
//! of degenerating into a stream of one-character tokens.

/// Lexical shape of one raw token.
#[derive(logos::Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RawToken {
    #[regex(r"[ \t\n\x0B\f\r]+")]
    Whitespace,

    /// A word: keyword or identifier, resolved later against the table.
    #[regex(r"[A-Za-z][A-Za-z0-9_$#]*")]
    Word,

    /// Single-quoted literal; a doubled quote inside is content.
    #[regex(r"'([^']|'')*'", priority = 12)]
    SQuote,

    /// Single-quoted literal cut off by end of input.
    #[regex(r"'([^']|'')*'?", priority = 3)]
    SQuoteUnterminated,

    /// Double-quoted identifier.
    #[regex(r#""[^"]*""#, priority = 12)]
    DQuote,

    /// Double-quoted identifier cut off by end of input.
    #[regex(r#""[^"]*"#, priority = 3)]
    DQuoteUnterminated,

    /// Numeric literal: digits with an optional fraction and exponent,
    /// or a fraction alone.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", priority = 6)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", priority = 6)]
    Number,

    /// A numeric literal directly followed by `..`, as in `1..10`.
    /// The scanner splits this into a number and a range token; without
    /// this shape the number pattern would swallow the first dot.
    #[regex(r"[0-9]+(\.[0-9]+)?\.\.", priority = 8)]
    NumberThenRange,

    /// An exponent marker with no digits after it, e.g. `1E` or `2.5E+`.
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?", priority = 4)]
    #[regex(r"\.[0-9]+[eE][+-]?", priority = 4)]
    NumberMalformed,

    /// `--` comment, terminal newline included when present.
    #[regex(r"--[^\n]*\n?")]
    HyphenComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", priority = 12)]
    BlockComment,

    /// Block comment cut off by end of input.
    #[regex(r"/\*([^*]|\*+[^*/])*\**", priority = 3)]
    BlockCommentUnterminated,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Asterisk,

    #[token("/")]
    Slash,

    #[token("=")]
    Equals,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(";")]
    SemiColon,

    #[token("%")]
    Percent,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("@")]
    AtSign,

    #[token(":")]
    Colon,

    #[token("**")]
    Expo,

    #[token("!=")]
    #[token("<>")]
    NotEqual,

    #[token("~=")]
    TildeEqual,

    #[token("^=")]
    CaretEqual,

    #[token("<=")]
    LessEqual,

    #[token(">=")]
    GreaterEqual,

    #[token(":=")]
    Assign,

    #[token("=>")]
    Arrow,

    #[token("..")]
    RangeDots,

    #[token("||")]
    DoublePipe,

    #[token("<<")]
    LeftLabel,

    #[token(">>")]
    RightLabel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn check(input: &str, kind: RawToken) {
        let mut lexer = RawToken::lexer(input);
        assert_eq!(lexer.next(), Some(Ok(kind)));
        assert_eq!(lexer.slice(), input);
    }

    #[test]
    fn lex_spaces_and_newlines() {
        check("  \n", RawToken::Whitespace);
    }

    #[test]
    fn lex_word() {
        check("hello", RawToken::Word);
        check("v_emp$no#2", RawToken::Word);
    }

    #[test]
    fn lex_string_literal() {
        check("'not empty'", RawToken::SQuote);
        check("''", RawToken::SQuote);
        check("'it''s'", RawToken::SQuote);
    }

    #[test]
    fn lex_unterminated_string_literal() {
        check("'dangling", RawToken::SQuoteUnterminated);
        // A trailing doubled quote leaves the literal open.
        check("'a''", RawToken::SQuoteUnterminated);
    }

    #[test]
    fn lex_quoted_identifier() {
        check(r#""Emp Name""#, RawToken::DQuote);
        check(r#""dangling"#, RawToken::DQuoteUnterminated);
    }

    #[test]
    fn lex_numbers() {
        check("0", RawToken::Number);
        check("42", RawToken::Number);
        check("3.14", RawToken::Number);
        check("5.", RawToken::Number);
        check(".5", RawToken::Number);
        check("1.25E-3", RawToken::Number);
        check("2e10", RawToken::Number);
    }

    #[test]
    fn lex_number_before_range() {
        let mut lexer = RawToken::lexer("1..10");
        assert_eq!(lexer.next(), Some(Ok(RawToken::NumberThenRange)));
        assert_eq!(lexer.slice(), "1..");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Number)));
        assert_eq!(lexer.slice(), "10");
    }

    #[test]
    fn lex_malformed_exponent() {
        check("1E", RawToken::NumberMalformed);
        check("1E+", RawToken::NumberMalformed);
        check("2.5e-", RawToken::NumberMalformed);
    }

    #[test]
    fn lex_comments() {
        check("-- to end of line\n", RawToken::HyphenComment);
        check("-- to end of input", RawToken::HyphenComment);
        check("/* inline */", RawToken::BlockComment);
        check("/* multi\n   line **/", RawToken::BlockComment);
        check("/* dangling *", RawToken::BlockCommentUnterminated);
    }

    #[test]
    fn lex_operators() {
        check("**", RawToken::Expo);
        check("!=", RawToken::NotEqual);
        check("<>", RawToken::NotEqual);
        check(":=", RawToken::Assign);
        check("=>", RawToken::Arrow);
        check("..", RawToken::RangeDots);
        check("||", RawToken::DoublePipe);
        check("<<", RawToken::LeftLabel);
        check(">>", RawToken::RightLabel);
    }

    #[test]
    fn lex_unmatched_operator_lead() {
        let mut lexer = RawToken::lexer("!");
        assert_eq!(lexer.next(), Some(Err(())));
    }
}
