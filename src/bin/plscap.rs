// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! A filter for PL/SQL source code: raises reserved words to upper
//! case, lowers identifiers to lower case. Everything else, comments
//! and literals included, passes through untouched.

use anyhow::Result;
use clap::Parser;
use plsfmt::input::read_source;
use plsfmt::{keyword, Scanner, TokenKind};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file; standard input when omitted.
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let source = read_source(args.file.as_deref())?;

    let mut out = BufWriter::new(io::stdout().lock());

    for token in Scanner::new(&source) {
        match token.kind {
            TokenKind::Eof => {}
            TokenKind::Ident => out.write_all(token.text.to_ascii_lowercase().as_bytes())?,
            TokenKind::Error => {
                out.write_all(token.text.as_bytes())?;
                out.flush()?;
                eprintln!(
                    "ERROR at line {}, column {}: {}",
                    token.line,
                    token.col,
                    token.message.as_deref().unwrap_or("unknown error")
                );
            }
            kind => match keyword::canonical_name(kind) {
                Some(name) => out.write_all(name.as_bytes())?,
                None => out.write_all(token.text.as_bytes())?,
            },
        }
    }

    out.flush()?;
    Ok(())
}
