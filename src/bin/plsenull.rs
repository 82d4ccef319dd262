// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Scans PL/SQL source code for attempts to test for equality (or
//! inequality) to NULL. Such comparisons never hold; `IS NULL` and
//! `IS NOT NULL` are what the author meant. Findings go to standard
//! error; the whole input is always consumed.

use clap::Parser;
use plsfmt::input::read_source;
use plsfmt::{Scanner, Token, TokenKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file; standard input when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let source = match read_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("plsenull: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut found = false;
    let mut prev = TokenKind::None;

    for token in Scanner::non_preserving(&source) {
        let what = match (prev, token.kind) {
            (TokenKind::Equals, TokenKind::NullKw) => Some("NULL following an equals sign"),
            (TokenKind::NotEqual, TokenKind::NullKw) => Some("NULL following a not-equal sign"),
            (TokenKind::NullKw, TokenKind::Equals) => Some("Equals sign following NULL"),
            (TokenKind::NullKw, TokenKind::NotEqual) => Some("Not-equal sign following NULL"),
            _ => None,
        };
        if let Some(what) = what {
            report(&token, what);
            found = true;
        }
        prev = token.kind;
    }

    if found {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report(token: &Token, what: &str) {
    eprintln!("Line {}, column {}: {what}", token.line, token.col);
}
