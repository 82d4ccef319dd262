// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Scans PL/SQL source code for string or character literals which
//! contain a line feed. Such literals are usually an unnoticed typo:
//! a quote left open until the next line happens to close it.

use clap::Parser;
use plsfmt::input::read_source;
use plsfmt::{Scanner, TokenKind};
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
            eprintln!("plsqlf: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut found = false;

    for token in Scanner::non_preserving(&source) {
        let what = match token.kind {
            TokenKind::StringLit if token.text.contains('\n') => {
                Some("String literal containing line feed")
            }
            TokenKind::CharLit if token.text.as_bytes().get(1) == Some(&b'\n') => {
                Some("Character literal containing line feed")
            }
            _ => None,
        };
        if let Some(what) = what {
            eprintln!("Line {}, column {}: {what}", token.line, token.col);
            found = true;
        }
    }

    if found {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
