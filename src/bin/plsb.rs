// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Beautifier for PL/SQL source code, applying a consistent use of
//! indentation and other white space.

use anyhow::Result;
use clap::Parser;
use plsfmt::input::read_source;
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
    plsfmt::beautify(&source, &mut out)?;
    out.flush()?;

    Ok(())
}
