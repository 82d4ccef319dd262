// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Test driver for the tokenizer: dumps the token stream, one token
//! per line with its source position. Whitespace and comments are
//! included, so piecing the `text` fields back together reproduces the
//! input.

use anyhow::Result;
use clap::Parser;
use plsfmt::input::read_source;
use plsfmt::{keyword, Scanner, Token, TokenKind};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file; standard input when omitted.
    file: Option<PathBuf>,

    /// Emit one JSON object per token instead of the readable dump.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let source = read_source(args.file.as_deref())?;

    let mut out = BufWriter::new(io::stdout().lock());

    for token in Scanner::new(&source) {
        if token.kind == TokenKind::Eof {
            break;
        }
        if args.json {
            let object = serde_json::json!({
                "kind": token.kind,
                "line": token.line,
                "col": token.col,
                "text": token.text,
                "message": token.message,
            });
            writeln!(out, "{object}")?;
        } else {
            write!(out, "{:04}\t{:04}\t", token.line, token.col)?;
            show_token(&mut out, &token)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn show_token(out: &mut impl Write, token: &Token) -> io::Result<()> {
    match token.kind {
        TokenKind::Ident => writeln!(out, "identifier '{}'", token.text),
        TokenKind::QuotedIdent | TokenKind::StringLit | TokenKind::CharLit
        | TokenKind::NumberLit => {
            writeln!(out, "{}: {}", token.kind.describe(), token.text)
        }
        TokenKind::Comment => {
            writeln!(out, "comment: {}", token.text.trim_end_matches('\n'))?;
            writeln!(out, "(Length = {})", token.text.len())
        }
        TokenKind::Whitespace => writeln!(out, "whitespace: '{}'", token.text),
        TokenKind::Error => writeln!(
            out,
            "error: {}",
            token.message.as_deref().unwrap_or("unknown error")
        ),
        kind if kind.is_keyword() => writeln!(
            out,
            "reserved word: {}",
            keyword::canonical_name(kind).unwrap_or("")
        ),
        kind => writeln!(out, "{}", kind.describe()),
    }
}
