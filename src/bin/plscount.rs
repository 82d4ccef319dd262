// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Scans PL/SQL source code to count tokens; whitespace and comments
//! are not counted.

use anyhow::Result;
use clap::Parser;
use indexmap::IndexMap;
use plsfmt::input::read_source;
use plsfmt::{Scanner, TokenKind};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file; standard input when omitted.
    file: Option<PathBuf>,

    /// Print a tally per token kind, in order of first appearance,
    /// instead of the total.
    #[arg(long)]
    by_kind: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let source = read_source(args.file.as_deref())?;

    let tokens = Scanner::non_preserving(&source).filter(|t| t.kind != TokenKind::Eof);

    if args.by_kind {
        let mut tally: IndexMap<TokenKind, u64> = IndexMap::new();
        for token in tokens {
            *tally.entry(token.kind).or_insert(0) += 1;
        }
        for (kind, count) in &tally {
            println!("{count}\t{kind}");
        }
    } else {
        println!("{}", tokens.count());
    }

    Ok(())
}
